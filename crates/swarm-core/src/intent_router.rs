//! Intent router
//!
//! Decision table from `(Intent, AgentRegistry, FlowState)` to a
//! `RouteDecision`. Rows are evaluated in order and the first match wins.

use swarm_types::{
    AgentKey, AgentRegistry, AssetScope, Domain, FlowMode, FlowState, Goal, Intent, RouteDecision,
    RouteReason,
};

/// Route one classified turn to an agent
pub fn route_intent(
    intent: &Intent,
    agents: &AgentRegistry,
    flow_state: &FlowState,
) -> RouteDecision {
    let to = |key: AgentKey, mode: FlowMode, reason: RouteReason| RouteDecision {
        agent_key: Some(key),
        agent_name: Some(agents.name(key).to_string()),
        mode,
        reason,
    };

    if intent.explicit_trading {
        return to(AgentKey::Trading, FlowMode::Execute, RouteReason::ExplicitTrading);
    }

    if intent.wants_execution() {
        return match execution_target(intent) {
            Some(key) => to(key, FlowMode::Execute, RouteReason::ExplicitExecute),
            // Never execute blind: an instruction without a resolvable domain
            // goes to the recommendation agent for a decision first.
            None => to(
                AgentKey::Recommendation,
                FlowMode::Decide,
                RouteReason::ExplicitExecute,
            ),
        };
    }

    if intent.wants_decision() {
        return to(
            AgentKey::Recommendation,
            FlowMode::Decide,
            RouteReason::DecisionRequest,
        );
    }

    if intent.goal == Goal::Learn || intent.domain == Domain::Knowledge {
        return to(AgentKey::Knowledge, FlowMode::Explore, RouteReason::LearnRequest);
    }

    match exploration_target(intent) {
        Some(key) => to(key, flow_state.mode, RouteReason::ExploreSpecific),
        None => RouteDecision {
            agent_key: None,
            agent_name: None,
            mode: flow_state.mode,
            reason: RouteReason::ExploreAmbiguous,
        },
    }
}

/// Specialist for an execute-shaped request
fn execution_target(intent: &Intent) -> Option<AgentKey> {
    if intent.domain == Domain::Staking || intent.asset_scope == AssetScope::Sol {
        Some(AgentKey::Staking)
    } else if intent.domain == Domain::Lending || intent.asset_scope == AssetScope::Stablecoins {
        Some(AgentKey::Lending)
    } else if intent.domain == Domain::Portfolio {
        Some(AgentKey::Wallet)
    } else if intent.domain == Domain::Liquidity {
        Some(AgentKey::Liquidity)
    } else {
        None
    }
}

/// Specialist for an exploratory request, domain first then asset scope
fn exploration_target(intent: &Intent) -> Option<AgentKey> {
    match intent.domain {
        Domain::Lending => Some(AgentKey::Lending),
        Domain::Staking => Some(AgentKey::Staking),
        Domain::Market => Some(AgentKey::Market),
        Domain::TokenAnalysis => Some(AgentKey::TokenAnalysis),
        Domain::Liquidity => Some(AgentKey::Liquidity),
        Domain::Portfolio => Some(AgentKey::Wallet),
        Domain::Knowledge => Some(AgentKey::Knowledge),
        Domain::Unknown => match intent.asset_scope {
            AssetScope::Stablecoins => Some(AgentKey::Lending),
            AssetScope::Sol => Some(AgentKey::Staking),
            AssetScope::Unknown => None,
        },
    }
}
