//! Mock LLM Client for Tests
//!
//! Implements `LlmClient` with a canned JSON reply, an error, or a delay,
//! and records the requests it receives.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use swarm_core::error::{RouterError, RouterResult};
use swarm_core::llm::{LlmClient, StructuredRequest};

/// Mock LLM client for testing
pub struct MockLlmClient {
    /// Whether to simulate success or failure
    simulate_success: bool,
    /// Reply returned on success
    response: Value,
    /// Artificial latency before replying
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<StructuredRequest>>,
}

impl MockLlmClient {
    /// Create a mock that replies with `response`
    pub fn with_response(response: Value) -> Self {
        Self {
            simulate_success: true,
            response,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose every call fails
    pub fn failing() -> Self {
        Self {
            simulate_success: false,
            ..Self::with_response(Value::Null)
        }
    }

    /// Delay every reply and return self for chaining
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_structured(&self, request: StructuredRequest) -> RouterResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if !self.simulate_success {
            return Err(RouterError::llm("Mock LLM client failure for testing"));
        }
        Ok(self.response.clone())
    }
}
