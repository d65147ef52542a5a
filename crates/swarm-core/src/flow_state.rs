//! Flow-state derivation
//!
//! The mode is a pure function of the intent. The conversation-aware variant
//! additionally looks at the tool history to remember which specialist was
//! last active and to escalate low-confidence follow-ups into a decision.

use crate::history::invocations_newest_first;
use swarm_types::tools::{matches_any_action, YIELD_ACTIONS};
use swarm_types::{AgentKey, ChatMessage, FlowMode, FlowState, Intent};
use tracing::debug;

/// Below this confidence an exploratory follow-up is treated as a decision
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Three-way mode rule shared by both derivations
pub fn mode_from_intent(intent: &Intent) -> FlowMode {
    if intent.wants_execution() {
        FlowMode::Execute
    } else if intent.wants_decision() {
        FlowMode::Decide
    } else {
        FlowMode::Explore
    }
}

/// Flow state from the intent alone
pub fn derive_flow_state_from_intent(intent: &Intent) -> FlowState {
    FlowState::new(mode_from_intent(intent))
}

/// Flow state from the intent and the full message history
pub fn derive_flow_state_from_conversation(intent: &Intent, messages: &[ChatMessage]) -> FlowState {
    let mode = mode_from_intent(intent);

    let last_yield_invocation = invocations_newest_first(messages)
        .find(|invocation| matches_any_action(&invocation.tool_name, YIELD_ACTIONS));
    let anchor = last_yield_invocation.or_else(|| invocations_newest_first(messages).next());

    let last_agent_key =
        anchor.and_then(|invocation| AgentKey::from_tool_name(&invocation.tool_name));

    let has_context = last_yield_invocation.is_some() || last_agent_key.is_some();
    let adjusted_mode = if intent.confidence < LOW_CONFIDENCE_THRESHOLD
        && mode == FlowMode::Explore
        && has_context
    {
        debug!(
            confidence = intent.confidence,
            ?last_agent_key,
            "Escalating low-confidence follow-up from explore to decide"
        );
        FlowMode::Decide
    } else {
        mode
    };

    FlowState::new(adjusted_mode).with_last_agent_key(last_agent_key)
}
