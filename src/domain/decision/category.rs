//! DecisionCategory enum - the life area a decision belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Life area of a decision. Serialized in lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionCategory {
    Career,
    Relationship,
    Education,
    Financial,
    Health,
    #[default]
    Lifestyle,
}

impl DecisionCategory {
    /// Returns all categories in form order.
    pub fn all() -> &'static [DecisionCategory] {
        &[
            DecisionCategory::Career,
            DecisionCategory::Relationship,
            DecisionCategory::Education,
            DecisionCategory::Financial,
            DecisionCategory::Health,
            DecisionCategory::Lifestyle,
        ]
    }

    /// Wire value, as sent to the analysis service.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionCategory::Career => "career",
            DecisionCategory::Relationship => "relationship",
            DecisionCategory::Education => "education",
            DecisionCategory::Financial => "financial",
            DecisionCategory::Health => "health",
            DecisionCategory::Lifestyle => "lifestyle",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DecisionCategory::Career => "Career",
            DecisionCategory::Relationship => "Relationship",
            DecisionCategory::Education => "Education",
            DecisionCategory::Financial => "Financial",
            DecisionCategory::Health => "Health",
            DecisionCategory::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for DecisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DecisionCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}
