//! Mock Analysis Service for testing.
//!
//! Queued responses, simulated latency and call tracking, so workflows can
//! run without a live analysis API.
//!
//! # Example
//!
//! ```ignore
//! let service = MockAnalysisService::new()
//!     .with_result(result)
//!     .with_error(AnalysisError::rejected(500, None));
//!
//! let first = service.analyze(&request).await?;
//! assert_eq!(service.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::analysis::AnalysisResult;
use crate::domain::decision::DecisionRequest;
use crate::ports::{AnalysisError, AnalysisService, HealthStatus};

/// Mock analysis service.
///
/// Responses are consumed in order. Once the queue is empty every call
/// succeeds with an empty (but renderable) result.
#[derive(Debug, Clone)]
pub struct MockAnalysisService {
    responses: Arc<Mutex<VecDeque<Result<AnalysisResult, AnalysisError>>>>,
    health: HealthStatus,
    delay: Duration,
    calls: Arc<Mutex<Vec<DecisionRequest>>>,
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            health: HealthStatus {
                status: "healthy".to_string(),
                matcher_loaded: true,
            },
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_result(self, result: AnalysisResult) -> Self {
        self.responses.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Adds a failure to the queue.
    pub fn with_error(self, error: AnalysisError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = health;
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded requests.
    pub fn get_calls(&self) -> Vec<DecisionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<AnalysisResult, AnalysisError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(AnalysisResult {
                    options_analysis: Some(Vec::new()),
                    ..AnalysisResult::default()
                })
            })
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, request: &DecisionRequest) -> Result<AnalysisResult, AnalysisError> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }

    async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        Ok(self.health.clone())
    }
}
