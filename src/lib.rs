//! Regret Engine - client for a regret analysis service.
//!
//! Guides a user through describing a pending decision, submits it to a
//! remote analysis service, and presents the predicted regret for each
//! option. The last profile and the ten most recent decisions are kept in
//! local storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
