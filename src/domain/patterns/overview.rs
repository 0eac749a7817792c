//! Pattern overview - chart series derived from [`PatternStats`].

use serde::Serialize;

use super::stats::{OrderedCounts, PatternStats};

pub const LOADING_MESSAGE: &str = "Loading pattern database statistics...";

pub const UNINITIALIZED_MESSAGE: &str =
    "Pattern database not yet initialized. Run data collection first.";

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Raw category key and its count, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: u64,
}

/// What the overview shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PatternOverview {
    Loading,
    /// The fetch failed or returned nothing usable.
    Uninitialized,
    Populated(PatternOverviewView),
}

impl PatternOverview {
    /// Message for the non-populated states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PatternOverview::Loading => Some(LOADING_MESSAGE),
            PatternOverview::Uninitialized => Some(UNINITIALIZED_MESSAGE),
            PatternOverview::Populated(_) => None,
        }
    }
}

/// Populated overview. A series that would be empty is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternOverviewView {
    pub total_patterns: Option<u64>,
    pub extracted_at: Option<String>,
    pub categories: Option<Vec<ChartPoint>>,
    pub severity: Option<Vec<ChartPoint>>,
    pub ages: Option<Vec<ChartPoint>>,
    pub breakdown: Vec<CategoryBreakdown>,
}

impl PatternOverviewView {
    pub fn from_stats(stats: &PatternStats) -> Self {
        Self {
            total_patterns: stats.total_patterns,
            extracted_at: stats.extracted_at.clone().filter(|s| !s.is_empty()),
            categories: category_series(&stats.categories),
            severity: severity_series(&stats.severity_distribution),
            ages: age_series(&stats.age_distribution),
            breakdown: stats
                .categories
                .iter()
                .map(|(category, count)| CategoryBreakdown {
                    category: category.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

impl From<&PatternStats> for PatternOverview {
    fn from(stats: &PatternStats) -> Self {
        PatternOverview::Populated(PatternOverviewView::from_stats(stats))
    }
}

/// Category keys with their first character upper-cased.
pub fn category_series(counts: &OrderedCounts) -> Option<Vec<ChartPoint>> {
    series(counts, capitalize)
}

/// Severity keys as `Level k`.
pub fn severity_series(counts: &OrderedCounts) -> Option<Vec<ChartPoint>> {
    series(counts, |key| format!("Level {key}"))
}

/// Age-range keys verbatim.
pub fn age_series(counts: &OrderedCounts) -> Option<Vec<ChartPoint>> {
    series(counts, str::to_string)
}

fn series(counts: &OrderedCounts, label: impl Fn(&str) -> String) -> Option<Vec<ChartPoint>> {
    if counts.is_empty() {
        return None;
    }
    Some(
        counts
            .iter()
            .map(|(key, value)| ChartPoint {
                label: label(key),
                value,
            })
            .collect(),
    )
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
