//! DecisionRequest - the payload submitted to the analysis service.

use serde::{Deserialize, Serialize};

use super::{DecisionCategory, DecisionTimeline};

/// Structured description of a pending decision.
///
/// Built by [`QuestionnaireForm::to_request`](super::QuestionnaireForm::to_request);
/// `age` is forwarded exactly as parsed, the service owns range validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub age: i64,
    pub situation: String,
    pub decision_description: String,
    pub options: Vec<String>,
    pub goals: String,
    pub timeline: DecisionTimeline,
    pub category: DecisionCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DecisionRequest {
        DecisionRequest {
            age: 25,
            situation: "Stable job, restless".to_string(),
            decision_description: "Quit to start a business?".to_string(),
            options: vec!["Stay".to_string(), "Leave".to_string()],
            goals: "Growth".to_string(),
            timeline: DecisionTimeline::OneToThreeMonths,
            category: DecisionCategory::Career,
        }
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "age": 25,
                "situation": "Stable job, restless",
                "decision_description": "Quit to start a business?",
                "options": ["Stay", "Leave"],
                "goals": "Growth",
                "timeline": "1-3 months",
                "category": "career"
            })
        );
    }
}
