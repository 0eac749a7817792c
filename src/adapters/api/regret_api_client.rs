//! Regret API client - HTTP implementation of the analysis and statistics
//! ports.
//!
//! # Endpoints
//!
//! - `POST {base_url}/api/analyze` - JSON [`DecisionRequest`] in, [`AnalysisResult`] out
//! - `GET {base_url}/api/patterns` - [`PatternStats`]
//! - `GET {base_url}/api/health` - `{status, matcher_loaded}`
//!
//! Failed analyses carry a JSON body `{"error": "..."}`; its message is
//! surfaced to the user when present.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RegretApiConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let client = RegretApiClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionRequest;
use crate::domain::patterns::PatternStats;
use crate::ports::{
    AnalysisError, AnalysisService, HealthStatus, PatternStatsProvider, StatsError,
};

/// Connection settings for the regret API.
#[derive(Debug, Clone)]
pub struct RegretApiConfig {
    /// Scheme, host and port, without the `/api` path.
    pub base_url: String,
    /// Applies to every request. Analyses can take a while.
    pub timeout: Duration,
}

impl RegretApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the regret analysis API.
#[derive(Debug, Clone)]
pub struct RegretApiClient {
    config: RegretApiConfig,
    client: Client,
}

impl RegretApiClient {
    pub fn new(config: RegretApiConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            AnalysisError::network(format!("Connection failed: {}", e))
        } else {
            AnalysisError::network(e.to_string())
        }
    }

    /// Turns a non-2xx response into `Rejected`, keeping the body's `error`.
    async fn check_status(response: Response) -> Result<Response, AnalysisError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);

        tracing::warn!(status = status.as_u16(), ?message, "Analysis API returned an error");
        Err(AnalysisError::rejected(status.as_u16(), message))
    }
}

#[async_trait]
impl AnalysisService for RegretApiClient {
    async fn analyze(&self, request: &DecisionRequest) -> Result<AnalysisResult, AnalysisError> {
        tracing::info!(
            category = %request.category,
            options = request.options.len(),
            "Submitting decision for analysis"
        );

        let response = self
            .client
            .post(self.url("/api/analyze"))
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::network(format!("Failed to read response: {}", e)))?;

        match serde_json::from_str::<Option<AnalysisResult>>(&body) {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(AnalysisError::invalid_response("empty analysis body")),
            Err(e) => Err(AnalysisError::invalid_response(e.to_string())),
        }
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let response = self
            .client
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = Self::check_status(response).await?;

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| AnalysisError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl PatternStatsProvider for RegretApiClient {
    async fn fetch_stats(&self) -> Result<PatternStats, StatsError> {
        let response = self
            .client
            .get(self.url("/api/patterns"))
            .send()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Pattern statistics unavailable");
            return Err(StatsError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;

        match serde_json::from_str::<Option<PatternStats>>(&body) {
            Ok(Some(stats)) => Ok(stats),
            Ok(None) => Err(StatsError::Empty),
            Err(e) => Err(StatsError::InvalidPayload(e.to_string())),
        }
    }
}
