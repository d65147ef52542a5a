//! Swarm Runner
//!
//! Loads recorded conversations, intents and tool sets from JSON files and
//! runs them through the routing engine. Each `run_*` function backs one
//! subcommand of the `swarm-runner` binary.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use swarm_core::{
    build_solana_router_context, derive_flow_state_from_conversation,
    derive_flow_state_from_intent, gate_tools_by_mode, route_intent, AgentToolbox,
    ChatCompletionsClient, GateOptions, LlmIntentClassifier, RouterConfig, SolanaRouter,
    TurnPlan, TurnRouter, WalletState,
};
use swarm_types::{
    AgentKey, AgentRegistry, Chain, ChatMessage, FlowState, Intent, RouteDecision, RouterContext,
    SolanaRouterDecision, ToolSet,
};
use tracing::{debug, info, instrument, warn};

/// A conversation file holds either a bare message array or `{ "messages": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ConversationFile {
    Messages(Vec<ChatMessage>),
    Wrapped { messages: Vec<ChatMessage> },
}

/// Flow state and routing decision printed by `route`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOutput {
    pub flow_state: FlowState,
    pub decision: RouteDecision,
}

/// Read and parse a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load a conversation
pub fn load_messages(path: &Path) -> Result<Vec<ChatMessage>> {
    let messages = match load_json::<ConversationFile>(path)? {
        ConversationFile::Messages(messages) => messages,
        ConversationFile::Wrapped { messages } => messages,
    };
    debug!(count = messages.len(), path = %path.display(), "Loaded conversation");
    Ok(messages)
}

/// Load a tool set from an object of key to definition, or an array of keys
pub fn load_tools(path: &Path) -> Result<ToolSet<Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if raw.trim_start().starts_with('[') {
        let keys: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse tool keys in {}", path.display()))?;
        return Ok(keys.into_iter().map(|key| (key, Value::Null)).collect());
    }
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse tool set in {}", path.display()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

/// Solana structured decision for the newest user message
#[instrument(skip(messages), fields(messages = messages.len()))]
pub async fn run_solana(messages: &[ChatMessage], use_llm: bool) -> Result<SolanaRouterDecision> {
    let router = if use_llm {
        let config = RouterConfig::load();
        SolanaRouter::from_config(&config).context("Failed to build the model-backed router")?
    } else {
        SolanaRouter::new()
    };
    if use_llm && !router.has_llm_client() {
        warn!("SWARM_ROUTER_USE_LLM is disabled, routing with heuristics only");
    }

    let decision = router.get_solana_router_decision(messages).await;
    info!(
        agent = %decision.agent,
        mode = %decision.mode,
        steps = decision.tool_plan.len(),
        "Solana routing decision"
    );
    Ok(decision)
}

/// Router context reconstructed from history
pub fn run_context(messages: &[ChatMessage]) -> RouterContext {
    build_solana_router_context(messages)
}

/// Route a given intent, with conversation-aware flow state when history is given
pub fn run_route(intent: &Intent, messages: Option<&[ChatMessage]>) -> RouteOutput {
    let flow_state = match messages {
        Some(messages) => derive_flow_state_from_conversation(intent, messages),
        None => derive_flow_state_from_intent(intent),
    };
    let decision = route_intent(intent, &AgentRegistry::default(), &flow_state);
    RouteOutput {
        flow_state,
        decision,
    }
}

/// Gate a tool set for the given options
pub fn run_gate(tools: ToolSet<Value>, options: &GateOptions) -> ToolSet<Value> {
    gate_tools_by_mode(tools, options)
}

/// Group tools by the agent their key prefix resolves to; unresolved keys are dropped
pub fn toolbox_from_tools(tools: ToolSet<Value>) -> AgentToolbox<Value> {
    let mut grouped: HashMap<AgentKey, ToolSet<Value>> = HashMap::new();
    for (key, tool) in tools {
        match AgentKey::from_tool_name(&key) {
            Some(agent) => {
                grouped.entry(agent).or_default().insert(key, tool);
            }
            None => debug!(tool = %key, "Skipping tool with unknown agent prefix"),
        }
    }
    grouped
        .into_iter()
        .fold(AgentToolbox::new(), |toolbox, (agent, tools)| {
            toolbox.with_tools(agent, tools)
        })
}

/// Full turn: model classification, flow state, routing and gating
#[instrument(skip(messages, tools), fields(messages = messages.len()))]
pub async fn run_turn(
    messages: &[ChatMessage],
    chain: Chain,
    wallet: WalletState,
    tools: ToolSet<Value>,
) -> Result<TurnPlan<Value>> {
    let config = RouterConfig::load();
    let client = ChatCompletionsClient::from_config(&config)
        .context("Failed to build the classification client")?;
    let classifier = LlmIntentClassifier::new(Arc::new(client), config.classifier_model.clone());
    let router = TurnRouter::new(
        Arc::new(classifier),
        AgentRegistry::default(),
        toolbox_from_tools(tools),
    );
    Ok(router.route_turn(messages, chain, wallet).await)
}
