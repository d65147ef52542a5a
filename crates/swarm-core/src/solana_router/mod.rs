//! Solana structured router
//!
//! Plans the agent, UI presentation, tool calls and stop condition for a turn
//! on the Solana chat surface. A deterministic heuristic decision is always
//! computed first. The model is consulted only for non-empty text, and its
//! answer is used only when it validates and is not strictly worse than the
//! heuristic: a plan-free model decision never replaces a heuristic plan.

pub mod context;
pub mod fallback;
pub mod prompt;
pub mod text;

pub use context::{
    build_solana_router_context, resume_action_from_annotations, summarize_yield_pools,
};
pub use fallback::{get_solana_router_fallback_decision, plan_retry, plan_yield_tool};
pub use text::{looks_like_retry, tokenize, TextSignals};

use crate::config::RouterConfig;
use crate::error::{RouterError, RouterResult};
use crate::history::latest_user_text;
use crate::llm::{ChatCompletionsClient, LlmClient, LlmMessage, StructuredRequest};
use std::sync::Arc;
use std::time::Duration;
use swarm_types::{ChatMessage, RouterContext, SolanaRouterDecision};
use tracing::{debug, info, instrument, warn};

/// Router for the Solana chat surface
#[derive(Clone)]
pub struct SolanaRouter {
    /// LLM client for the structured decision, heuristics only when absent
    llm_client: Option<Arc<dyn LlmClient>>,
    model: String,
    timeout: Option<Duration>,
}

impl Default for SolanaRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolanaRouter {
    /// Create a heuristics-only router
    pub fn new() -> Self {
        Self {
            llm_client: None,
            model: RouterConfig::default().router_model,
            timeout: None,
        }
    }

    /// Create a router from configuration, with a model client when enabled
    pub fn from_config(config: &RouterConfig) -> RouterResult<Self> {
        let router = Self::new()
            .with_model(config.router_model.clone())
            .with_timeout(config.timeout());
        if !config.use_llm_router {
            return Ok(router);
        }
        let client = ChatCompletionsClient::from_config(config)?;
        Ok(router.with_llm_client(Arc::new(client)))
    }

    /// Set the LLM client
    pub fn with_llm_client(mut self, client: Arc<dyn LlmClient>) -> Self {
        self.llm_client = Some(client);
        self
    }

    /// Set the model name and return self for chaining
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound the model call; elapsing counts as a failure
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether a model client is configured
    pub fn has_llm_client(&self) -> bool {
        self.llm_client.is_some()
    }

    /// Decide how to handle the newest user message in `messages`
    #[instrument(skip_all, fields(messages = messages.len()))]
    pub async fn get_solana_router_decision(
        &self,
        messages: &[ChatMessage],
    ) -> SolanaRouterDecision {
        let text = latest_user_text(messages);
        let context = build_solana_router_context(messages);
        self.decide(&text, &context).await
    }

    /// Decide for explicit text and context
    pub async fn decide(&self, text: &str, context: &RouterContext) -> SolanaRouterDecision {
        let fallback = get_solana_router_fallback_decision(text, context);

        if text.trim().is_empty() {
            debug!("Empty user text, using fallback decision");
            return fallback;
        }
        let Some(client) = self.llm_client.as_deref() else {
            return fallback;
        };

        match self.ask_model(client, text, context).await {
            Ok(decision) if decision.has_tool_plan() || !fallback.has_tool_plan() => {
                info!(
                    agent = %decision.agent,
                    mode = %decision.mode,
                    "Using model routing decision"
                );
                decision
            }
            Ok(_) => {
                warn!("Model decision has no tool plan but the fallback does, using fallback");
                fallback
            }
            Err(e) => {
                warn!("Model routing failed, using fallback: {}", e);
                fallback
            }
        }
    }

    async fn ask_model(
        &self,
        client: &dyn LlmClient,
        text: &str,
        context: &RouterContext,
    ) -> RouterResult<SolanaRouterDecision> {
        let request = StructuredRequest {
            model: self.model.clone(),
            system: prompt::system_prompt(),
            schema_name: prompt::DECISION_SCHEMA_NAME.to_string(),
            schema: prompt::decision_schema(),
            messages: vec![LlmMessage::user(prompt::user_message(text, context))],
        };

        let value = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, client.generate_structured(request))
                .await
                .map_err(|_| RouterError::Timeout(limit.as_millis() as u64))??,
            None => client.generate_structured(request).await?,
        };

        serde_json::from_value(value).map_err(|e| RouterError::invalid_decision(e.to_string()))
    }
}
