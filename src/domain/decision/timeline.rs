//! DecisionTimeline enum - how soon the decision has to be made.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Decision horizon. The wire values contain spaces and `+`, so each
/// variant is renamed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DecisionTimeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[default]
    #[serde(rename = "1-3 months")]
    OneToThreeMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "1+ years")]
    OverAYear,
}

impl DecisionTimeline {
    /// Returns all timelines in form order.
    pub fn all() -> &'static [DecisionTimeline] {
        &[
            DecisionTimeline::Immediate,
            DecisionTimeline::OneToThreeMonths,
            DecisionTimeline::ThreeToSixMonths,
            DecisionTimeline::SixToTwelveMonths,
            DecisionTimeline::OverAYear,
        ]
    }

    /// Wire value, as sent to the analysis service.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionTimeline::Immediate => "immediate",
            DecisionTimeline::OneToThreeMonths => "1-3 months",
            DecisionTimeline::ThreeToSixMonths => "3-6 months",
            DecisionTimeline::SixToTwelveMonths => "6-12 months",
            DecisionTimeline::OverAYear => "1+ years",
        }
    }

    /// Returns the display name shown next to each choice.
    pub fn display_name(&self) -> &'static str {
        match self {
            DecisionTimeline::Immediate => "Immediate (within days)",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for DecisionTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DecisionTimeline {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("timeline", format!("unknown timeline '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_is_one_to_three_months() {
        assert_eq!(DecisionTimeline::default().as_str(), "1-3 months");
    }

    #[test]
    fn timeline_serializes_to_wire_values() {
        let json = serde_json::to_string(&DecisionTimeline::OverAYear).unwrap();
        assert_eq!(json, "\"1+ years\"");

        let parsed: DecisionTimeline = serde_json::from_str("\"6-12 months\"").unwrap();
        assert_eq!(parsed, DecisionTimeline::SixToTwelveMonths);
    }

    #[test]
    fn timeline_parses_from_wire_values() {
        for timeline in DecisionTimeline::all() {
            assert_eq!(timeline.as_str().parse::<DecisionTimeline>().unwrap(), *timeline);
        }
    }

    #[test]
    fn unknown_timeline_is_rejected() {
        assert!("someday".parse::<DecisionTimeline>().is_err());
    }

    #[test]
    fn immediate_has_descriptive_display_name() {
        assert_eq!(DecisionTimeline::Immediate.to_string(), "Immediate (within days)");
        assert_eq!(DecisionTimeline::ThreeToSixMonths.to_string(), "3-6 months");
    }
}
