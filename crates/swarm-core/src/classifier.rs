//! Intent classification
//!
//! The classifier is a collaborator of the router: it turns the latest user
//! message(s) into an `Intent`. The model-backed implementation sends the
//! recent user turns and validates the reply into the `Intent` shape.

use crate::error::{RouterError, RouterResult};
use crate::llm::prompt_templates::{IntentPromptTemplate, INTENT_SCHEMA_NAME};
use crate::llm::{LlmClient, LlmMessage, StructuredRequest};
use std::sync::Arc;
use swarm_types::{clamp_confidence, Chain, ChatMessage, ChatRole, Intent};
use tracing::{debug, instrument};

/// Number of trailing user/assistant messages sent to the classifier
pub const CLASSIFIER_HISTORY_WINDOW: usize = 6;

/// Classify capability consumed by the turn pipeline
#[async_trait::async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, messages: &[ChatMessage], chain: Chain) -> RouterResult<Intent>;
}

/// Model-backed intent classifier
pub struct LlmIntentClassifier {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl LlmIntentClassifier {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            llm_client,
            model: model.into(),
        }
    }
}

#[async_trait::async_trait]
impl IntentClassifier for LlmIntentClassifier {
    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    async fn classify(&self, messages: &[ChatMessage], chain: Chain) -> RouterResult<Intent> {
        let prompt_messages = classifier_messages(messages);
        if prompt_messages.is_empty() {
            return Err(RouterError::llm("No user message to classify"));
        }

        let request = StructuredRequest {
            model: self.model.clone(),
            system: IntentPromptTemplate::system_prompt(chain),
            schema_name: INTENT_SCHEMA_NAME.to_string(),
            schema: IntentPromptTemplate::schema(),
            messages: prompt_messages,
        };

        let value = self.llm_client.generate_structured(request).await?;
        let mut intent: Intent = serde_json::from_value(value)
            .map_err(|e| RouterError::invalid_decision(format!("intent: {e}")))?;
        intent.confidence = clamp_confidence(intent.confidence);

        debug!(
            goal = %intent.goal,
            domain = %intent.domain,
            confidence = intent.confidence,
            "Classified intent"
        );
        Ok(intent)
    }
}

/// Trailing user/assistant turns with text, ending at the newest user turn
fn classifier_messages(messages: &[ChatMessage]) -> Vec<LlmMessage> {
    let Some(last_user) = messages.iter().rposition(|m| m.role == ChatRole::User) else {
        return Vec::new();
    };

    let mut window: Vec<LlmMessage> = messages[..=last_user]
        .iter()
        .rev()
        .filter_map(|message| {
            let text = message.text();
            if text.trim().is_empty() {
                return None;
            }
            match message.role {
                ChatRole::User => Some(LlmMessage::user(text)),
                ChatRole::Assistant => Some(LlmMessage::assistant(text)),
                _ => None,
            }
        })
        .take(CLASSIFIER_HISTORY_WINDOW)
        .collect();
    window.reverse();
    window
}
