//! Navigation module - which screen is showing.

mod view;

pub use view::{reduce, AppEvent, AppState, MountEpoch, Screen};
