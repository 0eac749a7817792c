//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the regret analysis workflow.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use ids::DecisionId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
