//! Result presenter - derives the results screen from an [`AnalysisResult`].
//!
//! The only interaction state is which option (if any) has its real-story
//! quotes expanded. Everything else is a pure function of the result.

use serde::Serialize;

use super::banding::{Band, SeverityBar};
use super::result::{present, AnalysisResult, OptionAnalysis, Recommendation};
use crate::domain::foundation::Percentage;

/// Shown when `patterns_analyzed` is absent or zero.
pub const PATTERNS_FALLBACK: &str = "multiple";

/// Shown when `similar_situations_count` is absent or zero.
pub const SIMILAR_SITUATIONS_FALLBACK: &str = "Multiple";

/// What the results screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultView {
    /// No result, or the result has no `options_analysis`. Only a reset
    /// affordance is offered.
    NoData,
    Ready(AnalysisView),
}

/// Fully derived results screen.
///
/// Optional sections are `None` when their source is absent or empty, and
/// `Some` always holds at least one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub patterns_label: String,
    pub server_note: Option<String>,
    pub recommendation: Option<RecommendationView>,
    pub hidden_factors: Option<Vec<String>>,
    pub options: Vec<OptionCard>,
    pub overall_insights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub suggested_option: Option<String>,
    pub reasoning: Option<String>,
    pub confidence: Option<Percentage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityBadge {
    pub value: f64,
    pub band: Band,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityView {
    pub value: f64,
    pub bar: SeverityBar,
}

/// Disclosure state of an option's quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Stories {
    Collapsed { count: usize },
    Expanded { quotes: Vec<String> },
}

impl Stories {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Stories::Expanded { .. })
    }
}

/// One card per entry of `options_analysis`, in response order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionCard {
    pub index: usize,
    pub label: String,
    pub probability: Option<ProbabilityBadge>,
    pub severity: Option<SeverityView>,
    pub timeline: Option<String>,
    pub similar_situations_label: String,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub key_insights: Option<Vec<String>>,
    pub stories: Option<Stories>,
}

/// Holds the result being shown and the single expanded-story index.
#[derive(Debug, Clone, Default)]
pub struct ResultPresenter {
    result: Option<AnalysisResult>,
    expanded: Option<usize>,
}

impl ResultPresenter {
    pub fn new(result: AnalysisResult) -> Self {
        Self::from_optional(Some(result))
    }

    pub fn from_optional(result: Option<AnalysisResult>) -> Self {
        Self {
            result,
            expanded: None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Opens the stories of `index`, or closes them if already open.
    ///
    /// Opening one option closes any other. Indices without quotes (or out
    /// of range) are ignored. Returns whether `index` is now expanded.
    pub fn toggle_story(&mut self, index: usize) -> bool {
        if !self.has_stories(index) {
            return false;
        }
        if self.expanded == Some(index) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(index);
            true
        }
    }

    fn has_stories(&self, index: usize) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.options_analysis.as_ref())
            .and_then(|options| options.get(index))
            .and_then(OptionAnalysis::quotes)
            .is_some()
    }

    /// Derives the screen for the current state.
    pub fn view(&self) -> ResultView {
        let Some(result) = self.result.as_ref() else {
            return ResultView::NoData;
        };
        let Some(options) = result.options_analysis.as_ref() else {
            return ResultView::NoData;
        };

        ResultView::Ready(AnalysisView {
            patterns_label: count_label(result.patterns_analyzed, PATTERNS_FALLBACK),
            server_note: result.error.clone().filter(|note| !note.trim().is_empty()),
            recommendation: result.recommendation.as_ref().map(recommendation_view),
            hidden_factors: owned(&result.hidden_factors),
            options: options
                .iter()
                .enumerate()
                .map(|(index, option)| option_card(index, option, self.expanded == Some(index)))
                .collect(),
            overall_insights: owned(&result.overall_insights),
        })
    }
}

fn owned(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    present(list).map(<[String]>::to_vec)
}

fn count_label(count: Option<u64>, fallback: &str) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => fallback.to_string(),
    }
}

fn recommendation_view(recommendation: &Recommendation) -> RecommendationView {
    RecommendationView {
        suggested_option: recommendation.suggested_option.clone(),
        reasoning: recommendation.reasoning.clone(),
        confidence: recommendation.confidence.map(Percentage::from_score),
    }
}

fn option_card(index: usize, option: &OptionAnalysis, expanded: bool) -> OptionCard {
    let stories = option.quotes().map(|quotes| {
        if expanded {
            Stories::Expanded {
                quotes: quotes.to_vec(),
            }
        } else {
            Stories::Collapsed {
                count: quotes.len(),
            }
        }
    });

    OptionCard {
        index,
        label: option
            .option
            .clone()
            .unwrap_or_else(|| format!("Option {}", index + 1)),
        probability: option.regret_probability.map(|value| ProbabilityBadge {
            value,
            band: Band::for_regret_probability(value),
        }),
        severity: option.regret_severity.map(|value| SeverityView {
            value,
            bar: SeverityBar::new(value),
        }),
        timeline: option.timeline.clone(),
        similar_situations_label: count_label(
            option.similar_situations_count,
            SIMILAR_SITUATIONS_FALLBACK,
        ),
        pros: owned(&option.pros),
        cons: owned(&option.cons),
        key_insights: owned(&option.key_insights),
        stories,
    }
}

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;
