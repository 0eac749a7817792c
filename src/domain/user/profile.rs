//! UserProfile - the last submitted age and goals, kept across sessions.

use serde::{Deserialize, Serialize};

/// Stored profile. Both fields hold the raw text from the last successful
/// submission; either may be absent in a partially written store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
}

impl UserProfile {
    pub fn new(age: impl Into<String>, goals: impl Into<String>) -> Self {
        Self {
            age: Some(age.into()),
            goals: Some(goals.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.goals.is_none()
    }
}
