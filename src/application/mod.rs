//! Application layer - controllers that drive the decision workflow.
//!
//! Controllers coordinate the domain with the ports: they own interaction
//! state (form contents, loading flags, the active screen) and decide when
//! to read or write storage and when to call the remote service.

pub mod app;
pub mod pattern_overview;
pub mod questionnaire;
pub mod stores;

pub use app::{AppContext, ViewRouter};
pub use pattern_overview::PatternOverviewController;
pub use questionnaire::{Completion, PendingSubmission, QuestionnaireController, SubmitError};
pub use stores::{HistoryStore, ProfileStore, HISTORY_KEY, PROFILE_KEY};
