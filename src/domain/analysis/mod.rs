//! Analysis module - the analysis service's response and how it is shown.
//!
//! # Components
//!
//! - `AnalysisResult` - response model, every field optional
//! - `Band` / `SeverityBar` - threshold classification of probability and severity
//! - `ResultPresenter` - derives the results screen and tracks the expanded story
//!
//! Everything here is pure. Fetching the result lives behind the
//! `AnalysisService` port.

mod banding;
mod presenter;
mod result;

pub use banding::{Band, SeverityBar, SEVERITY_SEGMENTS};
pub use presenter::{
    AnalysisView, OptionCard, ProbabilityBadge, RecommendationView, ResultPresenter, ResultView,
    SeverityView, Stories, PATTERNS_FALLBACK, SIMILAR_SITUATIONS_FALLBACK,
};
pub use result::{present, AnalysisResult, OptionAnalysis, Recommendation};
