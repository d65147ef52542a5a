//! Runner command tests over JSON fixtures on disk

use rstest::rstest;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use swarm_core::GateOptions;
use swarm_runner::{
    load_json, load_messages, load_tools, run_context, run_gate, run_route, run_solana,
    toolbox_from_tools,
};
use swarm_types::{
    AgentKey, FlowMode, Intent, RouteReason, StopCondition, UiMode,
    tools::SOLANA_LENDING_YIELDS_ACTION,
};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn retry_conversation() -> Value {
    json!([
        {"role": "user", "content": "lend 100 usdc on kamino"},
        {
            "role": "assistant",
            "content": "",
            "parts": [{
                "type": "tool-invocation",
                "toolInvocation": {
                    "toolCallId": "call_1",
                    "toolName": "lending-solana_lend",
                    "state": "result",
                    "args": {"tokenSymbol": "USDC", "protocol": "kamino"},
                    "result": {"message": "failed", "body": {"status": "failed"}}
                }
            }]
        },
        {"role": "user", "content": "try again"}
    ])
}

#[rstest]
#[case::bare_array(retry_conversation())]
#[case::wrapped(json!({"messages": retry_conversation()}))]
fn test_load_messages_accepts_both_layouts(#[case] document: Value) {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "conversation.json", &document);
    let messages = load_messages(&path).unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text(), "try again");
}

#[test]
fn test_context_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "conversation.json", &retry_conversation());
    let context = run_context(&load_messages(&path).unwrap());

    let action = context.last_action.expect("last action");
    assert_eq!(action.tool, "lending-solana_lend");
    assert_eq!(action.status.as_deref(), Some("failed"));
    assert!(context.last_yield.is_none());
}

#[tokio::test]
async fn test_solana_retry_without_model() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "conversation.json", &retry_conversation());
    let decision = run_solana(&load_messages(&path).unwrap(), false)
        .await
        .unwrap();

    assert_eq!(decision.agent, AgentKey::Lending);
    assert_eq!(decision.mode, FlowMode::Execute);
    assert_eq!(decision.tool_plan[0].tool, "lending-solana_lend");
    assert_eq!(
        decision.tool_plan[0].args,
        Some(json!({"tokenSymbol": "USDC", "protocol": "kamino"}))
    );
}

#[tokio::test]
async fn test_solana_all_pools_with_legacy_history() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "conversation.json",
        &json!([
            {
                "role": "assistant",
                "content": "",
                "toolInvocations": [{
                    "toolName": "staking-solana_liquid_staking_yields",
                    "state": "result",
                    "args": {"limit": 5},
                    "result": {"body": [{"symbol": "JITOSOL", "apy": 7.5}]}
                }]
            },
            {"role": "user", "content": "show all pools"}
        ]),
    );
    let decision = run_solana(&load_messages(&path).unwrap(), false)
        .await
        .unwrap();

    assert_eq!(decision.agent, AgentKey::Staking);
    assert_eq!(decision.ui, UiMode::Cards);
    assert_eq!(decision.stop_condition, StopCondition::WhenFirstYieldsResultReceived);
    assert_eq!(decision.tool_plan[0].args, Some(json!({"limit": 50})));
}

#[test]
fn test_route_with_and_without_history() {
    let dir = TempDir::new().unwrap();
    let intent_path = write_fixture(
        &dir,
        "intent.json",
        &json!({"goal": "explore", "domain": "unknown", "confidence": 0.3}),
    );
    let intent: Intent = load_json(&intent_path).unwrap();

    let bare = run_route(&intent, None);
    assert_eq!(bare.flow_state.mode, FlowMode::Explore);
    assert_eq!(bare.decision.reason, RouteReason::ExploreAmbiguous);

    let history = vec![swarm_types::ChatMessage::assistant("").with_tool_invocation(
        swarm_types::ToolInvocation::new(format!("lending-{SOLANA_LENDING_YIELDS_ACTION}")),
    )];
    let escalated = run_route(&intent, Some(&history));
    assert_eq!(escalated.flow_state.mode, FlowMode::Decide);
    assert_eq!(escalated.flow_state.last_agent_key, Some(AgentKey::Lending));
    assert_eq!(escalated.decision.mode, FlowMode::Decide);

    let output = serde_json::to_value(&escalated).unwrap();
    assert_eq!(output["flowState"]["lastAgentKey"], "lending");
    assert_eq!(output["decision"]["reason"], "explore_ambiguous");
}

#[rstest]
#[case::keys(r#"["wallet-solana_balance", "lending-solana_lend", "market-solana_token_price"]"#)]
#[case::definitions(
    r#"{
        "wallet-solana_balance": {"description": "balance"},
        "lending-solana_lend": {"description": "lend"},
        "market-solana_token_price": {"description": "price"}
    }"#
)]
fn test_gate_from_file(#[case] document: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tools.json");
    fs::write(&path, document).unwrap();
    let tools = load_tools(&path).unwrap();
    assert_eq!(
        tools.keys().collect::<Vec<_>>(),
        vec![
            "wallet-solana_balance",
            "lending-solana_lend",
            "market-solana_token_price"
        ]
    );

    let exploring = run_gate(tools.clone(), &GateOptions::new(FlowMode::Explore));
    assert_eq!(
        exploring.keys().collect::<Vec<_>>(),
        vec!["market-solana_token_price"]
    );

    let executing = run_gate(tools, &GateOptions::new(FlowMode::Execute));
    assert_eq!(
        executing.keys().collect::<Vec<_>>(),
        vec![
            "wallet-solana_balance",
            "lending-solana_lend",
            "market-solana_token_price"
        ]
    );
}

#[test]
fn test_toolbox_groups_by_prefix() {
    let tools = [
        ("lending-solana_lend", Value::Null),
        ("baselending-base_lend", Value::Null),
        ("wallet-solana_balance", Value::Null),
        ("mystery-do_thing", Value::Null),
    ]
    .into_iter()
    .collect();

    let toolbox = toolbox_from_tools(tools);
    let lending = toolbox.tools_for(AgentKey::Lending).expect("lending tools");
    assert_eq!(
        lending.keys().collect::<Vec<_>>(),
        vec!["lending-solana_lend", "baselending-base_lend"]
    );
    assert_eq!(toolbox.tools_for(AgentKey::Wallet).map(|t| t.len()), Some(1));
    assert!(toolbox.tools_for(AgentKey::Market).is_none());
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_messages(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(load_messages(&path).is_err());
    assert!(load_tools(&path).is_err());
}
