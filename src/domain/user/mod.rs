//! User module - what the client remembers about its user between sessions.
//!
//! - **UserProfile** - last submitted age and goals, used to prefill the form
//! - **DecisionHistory** - the ten most recent decisions with their analyses

mod history;
mod profile;

pub use history::{DecisionHistory, DecisionHistoryEntry, MAX_HISTORY_ENTRIES};
pub use profile::UserProfile;
