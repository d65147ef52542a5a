//! Deterministic fallback decision for the Solana router

use super::text::{looks_like_retry, TextSignals};
use serde::Serialize;
use swarm_types::tools::{ResumableAction, YieldDomain};
use swarm_types::{
    AgentKey, FlowMode, RouterContext, SolanaRouterDecision, StopCondition, ToolPlanStep, UiMode,
};

/// Limit used when the user asks for every pool
pub const ALL_POOLS_LIMIT: u64 = 50;

/// Sort key for yields listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YieldSortBy {
    Tvl,
    Apy,
}

/// Arguments of a planned yields call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldToolArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<YieldSortBy>,
}

impl YieldToolArgs {
    /// JSON args for the plan, `None` when nothing was set
    pub fn to_value(&self) -> Option<serde_json::Value> {
        if self.limit.is_none() && self.sort_by.is_none() {
            return None;
        }
        serde_json::to_value(self).ok()
    }
}

/// Heuristic decision for a user message and its context
pub fn get_solana_router_fallback_decision(
    text: &str,
    context: &RouterContext,
) -> SolanaRouterDecision {
    if let Some(decision) = plan_retry(text, context) {
        return decision;
    }
    if let Some(decision) = plan_yield_tool(text, context) {
        return decision;
    }
    SolanaRouterDecision::default()
}

/// Resume the last cancelled or failed action with identical arguments
pub fn plan_retry(text: &str, context: &RouterContext) -> Option<SolanaRouterDecision> {
    if !looks_like_retry(text) {
        return None;
    }
    let action = context.last_action.as_ref().filter(|a| a.is_retryable())?;

    let agent = AgentKey::from_tool_name(&action.tool)
        .or_else(|| ResumableAction::from_tool_name(&action.tool).map(|kind| kind.fallback_agent()))
        .unwrap_or(AgentKey::Lending);

    Some(SolanaRouterDecision {
        agent,
        mode: FlowMode::Execute,
        ui: UiMode::Text,
        tool_plan: vec![ToolPlanStep::new(action.tool.clone(), action.args.clone())],
        stop_condition: StopCondition::AfterToolPlanComplete,
    })
}

/// Plan a yields listing call when the text asks about pools
pub fn plan_yield_tool(text: &str, context: &RouterContext) -> Option<SolanaRouterDecision> {
    let signals = TextSignals::from_text(text);
    if !signals.wants_yields() {
        return None;
    }

    let domain = resolve_yield_domain(&signals, context);

    let previous_limit = context.last_yield.as_ref().and_then(|y| y.limit());
    let limit = if signals.asks_all || signals.refers_to_these {
        Some(ALL_POOLS_LIMIT)
    } else if signals.references_pools {
        previous_limit
    } else {
        None
    };
    let sort_by = if signals.asks_tvl {
        Some(YieldSortBy::Tvl)
    } else if signals.asks_yield {
        Some(YieldSortBy::Apy)
    } else {
        None
    };
    let args = YieldToolArgs { limit, sort_by };

    let (ui, stop_condition) = if signals.asks_highest || signals.asks_yield || signals.asks_tvl {
        (UiMode::CardsThenText, StopCondition::AfterToolPlanComplete)
    } else {
        (UiMode::Cards, StopCondition::WhenFirstYieldsResultReceived)
    };

    Some(SolanaRouterDecision {
        agent: domain.agent(),
        mode: FlowMode::Explore,
        ui,
        tool_plan: vec![ToolPlanStep::new(domain.action(), args.to_value())],
        stop_condition,
    })
}

/// Stay on the category the user was just looking at; otherwise look for
/// staking keywords and default to lending.
fn resolve_yield_domain(signals: &TextSignals, context: &RouterContext) -> YieldDomain {
    context
        .last_yield
        .as_ref()
        .and_then(|last| YieldDomain::from_tool_name(&last.tool))
        .unwrap_or(if signals.mentions_staking {
            YieldDomain::Staking
        } else {
            YieldDomain::Lending
        })
}
