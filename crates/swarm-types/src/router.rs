//! Solana structured router types
//!
//! `RouterContext` is rebuilt from history every turn and serialized into the
//! model prompt. `SolanaRouterDecision` is both the heuristic output and the
//! schema the model's structured output is validated against, so its enums
//! deliberately have no catch-all variant: an unknown value is a rejection.

use crate::agent::AgentKey;
use crate::flow::FlowMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Agents the Solana router may choose
pub type RouterAgentKey = AgentKey;

/// Modes the Solana router may choose
pub type RouterMode = FlowMode;

/// Maximum number of pools carried into the router context
pub const MAX_POOL_SAMPLES: usize = 6;

/// Lossy projection of one pool record from a yields tool result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPoolSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
}

/// Most recent yields listing seen in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastYield {
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pools: Option<Vec<YieldPoolSample>>,
}

impl LastYield {
    /// The `limit` argument of the previous listing call
    pub fn limit(&self) -> Option<u64> {
        self.args
            .as_ref()
            .and_then(|args| args.get("limit"))
            .and_then(Value::as_u64)
    }
}

/// Most recent resumable action seen in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastAction {
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl LastAction {
    /// Whether the previous attempt ended cancelled or failed
    pub fn is_retryable(&self) -> bool {
        matches!(self.status.as_deref(), Some("cancelled") | Some("failed"))
    }
}

/// Conversation context the Solana router reasons over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterContext {
    pub last_yield: Option<LastYield>,
    pub last_action: Option<LastAction>,
}

impl RouterContext {
    /// Whether both slots are filled
    pub fn is_complete(&self) -> bool {
        self.last_yield.is_some() && self.last_action.is_some()
    }
}

/// How the chat surface should present the turn
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UiMode {
    Cards,
    CardsThenText,
    #[default]
    Text,
}

/// When the streaming layer should stop calling tools
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StopCondition {
    #[default]
    None,
    WhenFirstYieldsResultReceived,
    AfterToolPlanComplete,
}

/// One planned tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolPlanStep {
    pub tool: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

impl ToolPlanStep {
    /// Create a step for a tool with optional args
    pub fn new(tool: impl Into<String>, args: Option<Value>) -> Self {
        Self {
            tool: tool.into(),
            args,
        }
    }
}

/// Structured routing decision for the Solana chat surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaRouterDecision {
    pub agent: RouterAgentKey,
    pub mode: RouterMode,
    pub ui: UiMode,
    #[serde(default)]
    pub tool_plan: Vec<ToolPlanStep>,
    #[serde(default)]
    pub stop_condition: StopCondition,
}

impl Default for SolanaRouterDecision {
    fn default() -> Self {
        Self {
            agent: AgentKey::Recommendation,
            mode: FlowMode::Explore,
            ui: UiMode::Text,
            tool_plan: Vec::new(),
            stop_condition: StopCondition::None,
        }
    }
}

impl SolanaRouterDecision {
    /// Whether the decision carries at least one tool call
    pub fn has_tool_plan(&self) -> bool {
        !self.tool_plan.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decision_defaults_when_fields_missing() {
        let decision: SolanaRouterDecision = serde_json::from_value(json!({
            "agent": "staking",
            "mode": "decide",
            "ui": "cards_then_text"
        }))
        .unwrap();
        assert!(decision.tool_plan.is_empty());
        assert_eq!(decision.stop_condition, StopCondition::None);
        assert_eq!(decision.ui, UiMode::CardsThenText);
    }

    #[test]
    fn test_decision_rejects_unknown_values() {
        let result = serde_json::from_value::<SolanaRouterDecision>(json!({
            "agent": "astrology",
            "mode": "explore",
            "ui": "text"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<SolanaRouterDecision>(json!({
            "agent": "lending",
            "mode": "explore",
            "ui": "carousel"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_retryable_status() {
        let action = LastAction {
            tool: "lending-solana_lend".to_string(),
            args: None,
            status: Some("failed".to_string()),
        };
        assert!(action.is_retryable());
        let action = LastAction {
            status: Some("complete".to_string()),
            ..action
        };
        assert!(!action.is_retryable());
    }

    #[test]
    fn test_context_serializes_null_slots() {
        let value = serde_json::to_value(RouterContext::default()).unwrap();
        assert_eq!(value, json!({"lastYield": null, "lastAction": null}));
    }
}
