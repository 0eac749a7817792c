//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the workflow and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - local string-keyed persistence
//! - `AnalysisService` - remote decision analysis
//! - `PatternStatsProvider` - pattern database statistics

mod analysis_service;
mod key_value_store;
mod pattern_stats_provider;

pub use analysis_service::{AnalysisError, AnalysisService, HealthStatus, GENERIC_ANALYSIS_ERROR};
pub use key_value_store::{validate_key, KeyValueStore, StorageError};
pub use pattern_stats_provider::{PatternStatsProvider, StatsError};
