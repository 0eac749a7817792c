//! Decision module - what the user is deciding and how the form captures it.

mod category;
mod form;
mod goals;
mod request;
mod timeline;

pub use category::DecisionCategory;
pub use form::{age_in_range, FormField, QuestionnaireForm, AGE_RANGE, GOAL_SEPARATOR};
pub use goals::{goal_suggestion, GOAL_SUGGESTIONS};
pub use request::DecisionRequest;
pub use timeline::DecisionTimeline;
