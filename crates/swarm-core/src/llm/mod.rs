//! LLM Integration Module
//!
//! The router consumes a single capability from a language model: given a
//! system prompt, a schema and messages, return a JSON object. Validation
//! against the concrete Rust type happens at the call site so that any
//! malformed output becomes an error the caller can fall back from.

pub mod client;
pub mod prompt_templates;

use crate::error::RouterResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use client::ChatCompletionsClient;

/// Role of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmRole {
    System,
    User,
    Assistant,
}

/// One prompt message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

impl LlmMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: LlmRole::Assistant,
            content: content.into(),
        }
    }
}

/// A structured-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    /// Model identifier
    pub model: String,
    pub system: String,
    /// Name of the output schema
    pub schema_name: String,
    /// JSON schema the output must satisfy
    pub schema: Value,
    pub messages: Vec<LlmMessage>,
}

/// Trait for LLM client abstraction
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a JSON object for the request
    async fn generate_structured(&self, request: StructuredRequest) -> RouterResult<Value>;
}
