//! Flow state and intent routing decisions
//!
//! Both are per-request values: the flow state is recomputed from the intent
//! and the message history every turn, and a `RouteDecision` is created fresh
//! from it. Neither is persisted.

use crate::agent::AgentKey;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Interaction mode of the conversation
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FlowMode {
    /// Browsing and informational questions
    #[default]
    Explore,
    /// Comparing options, about to choose
    Decide,
    /// Performing an on-chain action
    Execute,
}

/// Flow state derived for the current turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowState {
    pub mode: FlowMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_agent_key: Option<AgentKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wallet_address: Option<bool>,
}

impl FlowState {
    /// Create a flow state in the given mode
    pub fn new(mode: FlowMode) -> Self {
        Self {
            mode,
            last_agent_key: None,
            has_wallet_address: None,
        }
    }

    /// Set the last agent key and return self for chaining
    pub fn with_last_agent_key(mut self, key: Option<AgentKey>) -> Self {
        self.last_agent_key = key;
        self
    }

    /// Set wallet address availability and return self for chaining
    pub fn with_wallet_address(mut self, has_wallet_address: bool) -> Self {
        self.has_wallet_address = Some(has_wallet_address);
        self
    }
}

/// Why the intent router picked its target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RouteReason {
    ExplicitTrading,
    ExplicitExecute,
    DecisionRequest,
    LearnRequest,
    ExploreSpecific,
    ExploreAmbiguous,
}

/// Outcome of routing one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDecision {
    /// Semantic key of the chosen agent, `None` when nothing matched
    #[serde(default)]
    pub agent_key: Option<AgentKey>,
    /// Concrete agent name from the registry, `None` when nothing matched
    pub agent_name: Option<String>,
    pub mode: FlowMode,
    pub reason: RouteReason,
}

impl RouteDecision {
    /// Whether a specialist agent was selected
    pub fn has_agent(&self) -> bool {
        self.agent_name.is_some()
    }
}
