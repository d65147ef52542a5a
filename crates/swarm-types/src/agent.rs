//! Agent identities
//!
//! The closed set of specialist agents a turn can be routed to, the tool-key
//! prefix table that maps chain-specific agents back onto them, and the
//! caller-supplied registry of concrete agent names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Semantic agent keys, independent of chain
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AgentKey {
    Recommendation,
    Lending,
    Staking,
    Wallet,
    Trading,
    Market,
    TokenAnalysis,
    Liquidity,
    Knowledge,
}

impl AgentKey {
    /// Map a tool-key prefix (the part before the first `-`) onto an agent.
    ///
    /// Chain-prefixed aliases such as `basewallet` or `bsclending` collapse
    /// onto the same semantic key. Unknown prefixes resolve to `None`.
    pub fn from_tool_prefix(prefix: &str) -> Option<Self> {
        let key = match prefix {
            "recommendation" => AgentKey::Recommendation,
            "lending" | "baselending" | "bsclending" => AgentKey::Lending,
            "staking" | "basestaking" | "bscstaking" => AgentKey::Staking,
            "wallet" | "basewallet" | "bscwallet" => AgentKey::Wallet,
            "trading" | "basetrading" | "bsctrading" => AgentKey::Trading,
            "market" | "basemarket" | "bscmarket" => AgentKey::Market,
            "tokenanalysis" | "basetokenanalysis" | "bsctokenanalysis" => AgentKey::TokenAnalysis,
            "liquidity" | "baseliquidity" | "bscliquidity" => AgentKey::Liquidity,
            "knowledge" | "baseknowledge" | "bscknowledge" => AgentKey::Knowledge,
            _ => return None,
        };
        Some(key)
    }

    /// Resolve the agent that owns a `<agentPrefix>-<actionName>` tool key
    pub fn from_tool_name(tool_name: &str) -> Option<Self> {
        let prefix = tool_name.split('-').next().unwrap_or_default();
        Self::from_tool_prefix(prefix)
    }

    /// Get string representation for serialization
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Mapping from semantic agent key to the concrete agent name used by the
/// chat layer. Keys missing from the map fall back to the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRegistry {
    agents: HashMap<AgentKey, String>,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self {
            agents: AgentKey::iter()
                .map(|key| (key, format!("{key}-agent")))
                .collect(),
        }
    }
}

impl AgentRegistry {
    /// Create an empty registry; every lookup falls back to the key name
    pub fn empty() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    /// Set the agent name for a key and return self for chaining
    pub fn with_agent(mut self, key: AgentKey, name: impl Into<String>) -> Self {
        self.agents.insert(key, name.into());
        self
    }

    /// Get the agent name for a key
    pub fn name(&self, key: AgentKey) -> &str {
        self.agents
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.as_str())
    }
}
