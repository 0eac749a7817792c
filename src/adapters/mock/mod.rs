//! Mock adapters for the remote ports.

mod mock_analysis_service;
mod mock_pattern_stats_provider;

pub use mock_analysis_service::MockAnalysisService;
pub use mock_pattern_stats_provider::MockPatternStatsProvider;
