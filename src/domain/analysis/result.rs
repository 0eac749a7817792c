//! AnalysisResult - the analysis service's answer, modeled field-by-field
//! as optional so any subset of it can be rendered.
//!
//! Numeric fields are read leniently: integers, floats and numeric strings
//! are accepted, and any other value reads as absent instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response from the analysis service.
///
/// Every field may be absent. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub patterns_analyzed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_factors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_analysis: Option<Vec<OptionAnalysis>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_insights: Option<Vec<String>>,

    /// Note attached by the service when its own analysis step failed but it
    /// still answered with a success status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Echo of the submitted request, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<serde_json::Value>,
}

/// Suggested option with the service's reasoning.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_option: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// 0-100.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
}

/// Per-option regret assessment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,

    /// 0-100.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub regret_probability: Option<f64>,

    /// 0-10.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub regret_severity: Option<f64>,

    /// When regret typically emerges, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub similar_situations_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insights: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotes_examples: Option<Vec<String>>,
}

impl OptionAnalysis {
    /// Story quotes, only when present and non-empty.
    pub fn quotes(&self) -> Option<&[String]> {
        present(&self.quotes_examples)
    }
}

/// Borrows a list only when it is present and has at least one element.
pub fn present(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

/// Non-negative counts; fractional values are rounded.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number)
        .filter(|n| *n >= 0.0 && *n <= u64::MAX as f64)
        .map(|n| n.round() as u64))
}
