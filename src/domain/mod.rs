//! Domain layer containing the decision workflow's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, percentages, errors)
//! - `decision` - Questionnaire form, categories, timelines, the analysis request
//! - `analysis` - Analysis result model, banding and the result presenter
//! - `patterns` - Pattern database statistics and chart series
//! - `user` - Stored profile and decision history
//! - `navigation` - Top-level view state and its transitions

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod navigation;
pub mod patterns;
pub mod user;
