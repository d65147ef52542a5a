//! Tests for flow-state derivation

mod common;

use common::{action_message, yields_message};
use serde_json::json;
use swarm_core::flow_state::{
    derive_flow_state_from_conversation, derive_flow_state_from_intent,
};
use swarm_types::{
    AgentKey, ChatMessage, DecisionStrength, FlowMode, Goal, Intent, ToolInvocation,
};

fn low_confidence_explore() -> Intent {
    Intent::unknown()
        .with_goal(Goal::Explore)
        .with_decision_strength(DecisionStrength::None)
        .with_confidence(0.3)
}

#[test]
fn test_low_confidence_follow_up_escalates_to_decide() {
    let messages = vec![
        ChatMessage::user("show me liquid staking options"),
        yields_message("staking-solana_liquid_staking_yields", json!({}), 4),
        ChatMessage::user("that one?"),
    ];

    let state = derive_flow_state_from_conversation(&low_confidence_explore(), &messages);
    assert_eq!(state.mode, FlowMode::Decide);
    assert_eq!(state.last_agent_key, Some(AgentKey::Staking));
}

#[test]
fn test_confident_explore_is_not_escalated() {
    let messages = vec![
        yields_message("lending-solana_lending_yields", json!({}), 2),
        ChatMessage::user("what about market prices"),
    ];
    let intent = low_confidence_explore().with_confidence(0.8);

    let state = derive_flow_state_from_conversation(&intent, &messages);
    assert_eq!(state.mode, FlowMode::Explore);
    assert_eq!(state.last_agent_key, Some(AgentKey::Lending));
}

#[test]
fn test_no_history_no_escalation() {
    let state = derive_flow_state_from_conversation(
        &low_confidence_explore(),
        &[ChatMessage::user("hmm")],
    );
    assert_eq!(state.mode, FlowMode::Explore);
    assert_eq!(state.last_agent_key, None);
}

#[test]
fn test_yield_invocation_beats_newer_non_yield_invocation() {
    let messages = vec![
        yields_message("staking-solana_liquid_staking_yields", json!({"limit": 10}), 2),
        ChatMessage::assistant("")
            .with_tool_invocation(ToolInvocation::new("market-solana_token_price")),
    ];
    let state =
        derive_flow_state_from_conversation(&Intent::unknown().with_confidence(0.9), &messages);
    assert_eq!(state.last_agent_key, Some(AgentKey::Staking));
}

#[test]
fn test_falls_back_to_latest_invocation_of_any_kind() {
    let messages = vec![
        action_message("lending-solana_lend", json!({"amount": 1}), "complete"),
        ChatMessage::assistant("")
            .with_legacy_tool_invocation(ToolInvocation::new("bscwallet-bsc_balance")),
        ChatMessage::user("and now?"),
    ];
    let state = derive_flow_state_from_conversation(&low_confidence_explore(), &messages);
    assert_eq!(state.last_agent_key, Some(AgentKey::Wallet));
    assert_eq!(state.mode, FlowMode::Decide);
}

#[test]
fn test_unknown_prefix_resolves_to_none_without_escalation() {
    let messages = vec![
        ChatMessage::assistant("").with_tool_invocation(ToolInvocation::new("mystery-do_thing")),
        ChatMessage::user("ok"),
    ];
    let state = derive_flow_state_from_conversation(&low_confidence_explore(), &messages);
    assert_eq!(state.last_agent_key, None);
    assert_eq!(state.mode, FlowMode::Explore);
}

#[test]
fn test_execute_mode_is_never_adjusted() {
    let messages = vec![yields_message("lending-solana_lending_yields", json!({}), 1)];
    let intent = Intent::unknown()
        .with_goal(Goal::Execute)
        .with_confidence(0.1);
    let state = derive_flow_state_from_conversation(&intent, &messages);
    assert_eq!(state.mode, FlowMode::Execute);
    assert_eq!(derive_flow_state_from_intent(&intent).mode, FlowMode::Execute);
}
