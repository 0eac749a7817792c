//! Mock pattern statistics provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::patterns::PatternStats;
use crate::ports::{PatternStatsProvider, StatsError};

/// Returns the same configured answer on every call and counts calls.
#[derive(Debug, Clone)]
pub struct MockPatternStatsProvider {
    response: Result<PatternStats, StatsError>,
    calls: Arc<AtomicUsize>,
}

impl MockPatternStatsProvider {
    pub fn with_stats(stats: PatternStats) -> Self {
        Self {
            response: Ok(stats),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: StatsError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PatternStatsProvider for MockPatternStatsProvider {
    async fn fetch_stats(&self) -> Result<PatternStats, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
