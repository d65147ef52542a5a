//! Chat completions client
//!
//! Implements `LlmClient` against an OpenAI-compatible `/chat/completions`
//! endpoint (ZAI GLM by default). One request per call, no retries: the
//! callers own the fallback path.

use super::{LlmClient, StructuredRequest};
use crate::config::RouterConfig;
use crate::error::{RouterError, RouterResult};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};

/// OpenAI-compatible chat completions client
#[derive(Clone)]
pub struct ChatCompletionsClient {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
    temperature: f32,
}

impl std::fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("url", &self.url)
            .field("api_key", &"***")
            .finish()
    }
}

impl ChatCompletionsClient {
    /// Create a client for an explicit endpoint
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url: url.into(),
            api_key: api_key.into(),
            temperature: 0.0,
        }
    }

    /// Build a client from router configuration
    pub fn from_config(config: &RouterConfig) -> RouterResult<Self> {
        let api_key = config.require_api_key()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http_client,
            url: config.chat_completions_url(),
            api_key: api_key.to_string(),
            temperature: config.temperature,
        })
    }

    /// Initialize with environment variables
    pub fn from_env() -> RouterResult<Self> {
        Self::from_config(&RouterConfig::load())
    }

    /// Set sampling temperature and return self for chaining
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn request_body(&self, request: &StructuredRequest) -> Value {
        let schema = serde_json::to_string(&request.schema).unwrap_or_default();
        let system = format!(
            "{}\n\nOutput schema `{}`:\n{}",
            request.system, request.schema_name, schema
        );

        let mut messages = vec![json!({ "role": "system", "content": system })];
        messages.extend(
            request
                .messages
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content })),
        );

        json!({
            "model": request.model,
            "messages": messages,
            "temperature": self.temperature,
            "response_format": { "type": "json_object" }
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for ChatCompletionsClient {
    #[instrument(
        skip(self, request),
        fields(model = %request.model, schema = %request.schema_name)
    )]
    async fn generate_structured(&self, request: StructuredRequest) -> RouterResult<Value> {
        let body = self.request_body(&request);
        debug!("Sending structured request to {}", self.url);

        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to LLM API: {}", e);
                RouterError::Http(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RouterError::llm(format!(
                "LLM API returned error: {status} - {error_text}"
            )));
        }

        let response_json: Value = response.json().await?;
        let content = extract_message_content(&response_json)?;
        info!("Received structured response ({} chars)", content.len());

        parse_json_object(content)
    }
}

/// Pull the assistant text out of a chat completions response
pub fn extract_message_content(response: &Value) -> RouterResult<&str> {
    let message = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .ok_or_else(|| RouterError::llm("Invalid response format from LLM API"))?;

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
        .or_else(|| message.get("reasoning_content").and_then(Value::as_str))
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(RouterError::llm("LLM returned empty response"));
    }
    Ok(content)
}

/// Parse the outermost JSON object in a model reply, tolerating prose or
/// code fences around it
pub fn parse_json_object(content: &str) -> RouterResult<Value> {
    let (Some(start), Some(end)) = (content.find('{'), content.rfind('}')) else {
        return Err(RouterError::llm("No JSON object in LLM response"));
    };
    if end < start {
        return Err(RouterError::llm("No JSON object in LLM response"));
    }
    let value: Value = serde_json::from_str(&content[start..=end])?;
    Ok(value)
}
