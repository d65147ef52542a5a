use thiserror::Error;

/// Errors raised by the routing engine's collaborators
///
/// Routing itself never fails; these surface only from the model-backed
/// classifier and structured router, where callers fall back to heuristics.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The language model call failed or returned unusable output
    #[error("LLM error: {0}")]
    Llm(String),

    /// Structured output did not match the decision schema
    #[error("Invalid decision: {0}")]
    InvalidDecision(String),

    /// The model did not answer within the configured timeout
    #[error("Timed out after {0} ms")]
    Timeout(u64),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RouterError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new LLM error
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// Create a new invalid decision error
    pub fn invalid_decision(msg: impl Into<String>) -> Self {
        Self::InvalidDecision(msg.into())
    }
}

/// Result type for routing collaborators
pub type RouterResult<T> = Result<T, RouterError>;
