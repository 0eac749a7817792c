//! PatternOverviewController - fetches pattern statistics once per mount.

use std::sync::Arc;

use crate::domain::patterns::PatternOverview;
use crate::ports::PatternStatsProvider;

pub struct PatternOverviewController {
    provider: Arc<dyn PatternStatsProvider>,
    state: PatternOverview,
    fetched: bool,
}

impl PatternOverviewController {
    /// Starts in the loading state; nothing is fetched until [`load`](Self::load).
    pub fn mount(provider: Arc<dyn PatternStatsProvider>) -> Self {
        Self {
            provider,
            state: PatternOverview::Loading,
            fetched: false,
        }
    }

    pub fn state(&self) -> &PatternOverview {
        &self.state
    }

    /// Fetches statistics on the first call. Later calls return the settled
    /// state without another request.
    pub async fn load(&mut self) -> &PatternOverview {
        if self.fetched {
            return &self.state;
        }
        self.fetched = true;

        self.state = match self.provider.fetch_stats().await {
            Ok(stats) => PatternOverview::from(&stats),
            Err(e) => {
                tracing::debug!(error = %e, "Pattern statistics unavailable");
                PatternOverview::Uninitialized
            }
        };
        &self.state
    }
}
