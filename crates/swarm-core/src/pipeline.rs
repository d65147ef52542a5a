//! Turn pipeline
//!
//! Wires the pieces together for one chat turn: classify the message,
//! derive the flow state from history, route to an agent and gate that
//! agent's tools. Classification failures degrade to an unknown intent, so
//! a turn always yields a plan.

use crate::classifier::IntentClassifier;
use crate::flow_state::derive_flow_state_from_conversation;
use crate::intent_router::route_intent;
use crate::tool_gate::{gate_tools_by_mode, GateOptions};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use swarm_types::{
    AgentKey, AgentRegistry, Chain, ChatMessage, FlowState, Intent, RouteDecision, ToolSet,
};
use tracing::{info, instrument, warn};

/// Wallet facts known to the chat layer for this request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    /// Whether the UI can offer a wallet connection
    pub allow_wallet_connect: bool,
    /// Whether a wallet address is already known
    pub has_wallet_address: bool,
}

/// Full tool sets per agent, before gating
#[derive(Debug, Clone)]
pub struct AgentToolbox<T> {
    tools: HashMap<AgentKey, ToolSet<T>>,
}

impl<T> Default for AgentToolbox<T> {
    fn default() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }
}

impl<T> AgentToolbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent's tools and return self for chaining
    pub fn with_tools(mut self, agent: AgentKey, tools: ToolSet<T>) -> Self {
        self.tools.insert(agent, tools);
        self
    }

    /// Tools of an agent, if registered
    pub fn tools_for(&self, agent: AgentKey) -> Option<&ToolSet<T>> {
        self.tools.get(&agent)
    }
}

/// Everything decided for one turn
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnPlan<T> {
    pub intent: Intent,
    pub flow_state: FlowState,
    pub decision: RouteDecision,
    /// Gated tools of the routed agent, empty when no agent was chosen
    pub tools: ToolSet<T>,
}

/// Routes chat turns end to end
pub struct TurnRouter<T> {
    classifier: Arc<dyn IntentClassifier>,
    agents: AgentRegistry,
    toolbox: AgentToolbox<T>,
}

impl<T: Clone> TurnRouter<T> {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        agents: AgentRegistry,
        toolbox: AgentToolbox<T>,
    ) -> Self {
        Self {
            classifier,
            agents,
            toolbox,
        }
    }

    /// Plan one turn over the given history snapshot
    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    pub async fn route_turn(
        &self,
        messages: &[ChatMessage],
        chain: Chain,
        wallet: WalletState,
    ) -> TurnPlan<T> {
        let intent = match self.classifier.classify(messages, chain).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!("Intent classification failed, routing without intent: {}", e);
                Intent::unknown()
            }
        };

        let flow_state = derive_flow_state_from_conversation(&intent, messages)
            .with_wallet_address(wallet.has_wallet_address);
        let decision = route_intent(&intent, &self.agents, &flow_state);

        let tools = decision
            .agent_key
            .and_then(|key| self.toolbox.tools_for(key))
            .cloned()
            .map(|tools| {
                let options = GateOptions::new(decision.mode)
                    .with_wallet_connect(wallet.allow_wallet_connect)
                    .with_wallet_address(wallet.has_wallet_address);
                gate_tools_by_mode(tools, &options)
            })
            .unwrap_or_default();

        info!(
            agent = decision.agent_name.as_deref().unwrap_or("none"),
            mode = %decision.mode,
            reason = %decision.reason,
            tools = tools.len(),
            "Routed turn"
        );

        TurnPlan {
            intent,
            flow_state,
            decision,
            tools,
        }
    }
}
