//! Canned life-goal phrases offered next to the goals field.

/// Suggestions in display order. Selecting one appends it to the goals text.
pub const GOAL_SUGGESTIONS: &[&str] = &[
    "Financial security",
    "Career growth",
    "Work-life balance",
    "Personal fulfillment",
    "Family and relationships",
    "Health and wellbeing",
    "Adventure and new experiences",
    "Making a positive impact",
];

/// Looks up a suggestion by its position in [`GOAL_SUGGESTIONS`].
pub fn goal_suggestion(index: usize) -> Option<&'static str> {
    GOAL_SUGGESTIONS.get(index).copied()
}
