//! Configuration for the model-backed parts of the router
//!
//! Values come from environment variables (a `.env` file is loaded when
//! present) with defaults that target the ZAI OpenAI-compatible endpoint.

use crate::error::{RouterError, RouterResult};
use std::env;
use std::time::Duration;

/// Default OpenAI-compatible endpoint
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.z.ai/api/coding/paas/v4";

/// Default model for routing and classification
pub const DEFAULT_ROUTER_MODEL: &str = "glm-4.6";

/// Default model call timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Router configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// Base URL of the chat completions API
    pub llm_base_url: String,
    /// API key, required only when a model client is built
    pub llm_api_key: Option<String>,
    /// Model used for the Solana structured decision
    pub router_model: String,
    /// Model used for intent classification
    pub classifier_model: String,
    /// Timeout for a single model call in seconds
    pub timeout_seconds: u64,
    /// Sampling temperature for structured calls
    pub temperature: f32,
    /// Whether the Solana router asks the model at all
    pub use_llm_router: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_api_key: None,
            router_model: DEFAULT_ROUTER_MODEL.to_string(),
            classifier_model: DEFAULT_ROUTER_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            temperature: 0.0,
            use_llm_router: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let router_model = get_env_string("SWARM_ROUTER_MODEL", DEFAULT_ROUTER_MODEL);
        Self {
            llm_base_url: get_env_string("SWARM_LLM_BASE_URL", DEFAULT_LLM_BASE_URL),
            llm_api_key: env::var("SWARM_LLM_API_KEY")
                .or_else(|_| env::var("ZAI_API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty()),
            classifier_model: get_env_string("SWARM_CLASSIFIER_MODEL", &router_model),
            router_model,
            timeout_seconds: get_env_var("SWARM_LLM_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS),
            temperature: get_env_var("SWARM_LLM_TEMPERATURE", 0.0),
            use_llm_router: get_env_var("SWARM_ROUTER_USE_LLM", true),
        }
    }

    /// Load configuration, prioritizing environment variables over defaults
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Get the timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// The API key, or a configuration error when it is missing
    pub fn require_api_key(&self) -> RouterResult<&str> {
        self.llm_api_key
            .as_deref()
            .ok_or_else(|| RouterError::config("SWARM_LLM_API_KEY or ZAI_API_KEY must be set"))
    }

    /// Chat completions endpoint URL
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.llm_base_url.trim_end_matches('/')
        )
    }
}

/// Helper function to get environment variable with default value
pub fn get_env_var<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Helper function to get environment variable as string with default value
pub fn get_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
