//! Analysis Service Port - the remote regret analysis API.
//!
//! The service matches a [`DecisionRequest`] against its pattern database and
//! answers with an [`AnalysisResult`]. The client never interprets the result
//! beyond rendering it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionRequest;

/// Shown when a failed submission carries no message of its own.
pub const GENERIC_ANALYSIS_ERROR: &str = "Failed to analyze decision. Please try again.";

/// Port for decision analysis.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submits one decision for analysis.
    async fn analyze(&self, request: &DecisionRequest) -> Result<AnalysisResult, AnalysisError>;

    /// Reports whether the service is up and its pattern matcher loaded.
    async fn health(&self) -> Result<HealthStatus, AnalysisError>;
}

/// Health endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub matcher_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.matcher_loaded
    }
}

/// Analysis failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Non-2xx answer. `message` is the body's `error` field when present.
    #[error("analysis rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// 2xx answer whose body is not an analysis result.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl AnalysisError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Message to show beside the form: the server's own message when it
    /// sent a non-blank one, otherwise [`GENERIC_ANALYSIS_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ANALYSIS_ERROR.to_string(),
        }
    }
}
