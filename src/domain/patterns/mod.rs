//! Patterns module - statistics about the regret pattern database and the
//! charts derived from them.

mod overview;
mod stats;

pub use overview::{
    age_series, category_series, severity_series, CategoryBreakdown, ChartPoint, PatternOverview,
    PatternOverviewView, LOADING_MESSAGE, UNINITIALIZED_MESSAGE,
};
pub use stats::{OrderedCounts, PatternStats};
