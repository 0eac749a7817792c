//! Pattern Stats Provider Port - aggregate statistics of the pattern database.

use async_trait::async_trait;

use crate::domain::patterns::PatternStats;

/// Reasons statistics are unavailable. Callers treat all of them alike.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("statistics request failed with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid statistics payload: {0}")]
    InvalidPayload(String),

    /// The service answered successfully but with nothing.
    #[error("no statistics available")]
    Empty,
}

/// Port for reading pattern database statistics.
#[async_trait]
pub trait PatternStatsProvider: Send + Sync {
    async fn fetch_stats(&self) -> Result<PatternStats, StatsError>;
}
