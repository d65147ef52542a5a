//! Tool gate tests

use proptest::prelude::*;
use rstest::rstest;
use swarm_core::tool_gate::{gate_tools_by_mode, is_tool_allowed, GateOptions};
use swarm_types::tools::{GatedAction, YIELD_ACTIONS};
use swarm_types::{FlowMode, ToolSet};

const KNOWN_KEYS: &[&str] = &[
    "recommendation-ui_decision_response",
    "lending-solana_lending_yields",
    "staking-solana_liquid_staking_yields",
    "baselending-base_lending_yields",
    "bsclending-bsc_lending_yields",
    "wallet-solana_get_wallet_address",
    "basewallet-base_get_wallet_address",
    "lending-solana_lend",
    "lending-solana_withdraw",
    "staking-solana_stake",
    "staking-solana_unstake",
    "trading-solana_trade",
    "wallet-solana_transfer",
    "liquidity-solana_deposit_liquidity",
    "liquidity-solana_withdraw_liquidity",
    "basestaking-base_stake",
    "bsctrading-bsc_trade",
    "wallet-solana_balance",
    "wallet-solana_all_balances",
    "bscwallet-bsc_all_balances",
    "market-solana_token_price",
    "knowledge-search_docs",
];

fn full_toolset() -> ToolSet<usize> {
    KNOWN_KEYS
        .iter()
        .enumerate()
        .map(|(i, key)| (*key, i))
        .collect()
}

fn keys(tools: &ToolSet<usize>) -> Vec<&str> {
    tools.keys().collect()
}

#[rstest]
#[case(FlowMode::Explore, false)]
#[case(FlowMode::Decide, true)]
#[case(FlowMode::Execute, false)]
fn test_decision_response_only_in_decide(#[case] mode: FlowMode, #[case] allowed: bool) {
    assert_eq!(
        is_tool_allowed("recommendation-ui_decision_response", &GateOptions::new(mode)),
        allowed
    );
}

#[rstest]
#[case(FlowMode::Explore, true)]
#[case(FlowMode::Decide, true)]
#[case(FlowMode::Execute, false)]
fn test_yield_listings_hidden_while_executing(#[case] mode: FlowMode, #[case] allowed: bool) {
    let options = GateOptions::new(mode);
    assert_eq!(is_tool_allowed("lending-solana_lending_yields", &options), allowed);
    assert_eq!(is_tool_allowed("bsclending-bsc_lending_yields", &options), allowed);
}

#[rstest]
#[case("lending-solana_lend")]
#[case("staking-solana_unstake")]
#[case("basestaking-base_stake")]
#[case("bsctrading-bsc_trade")]
#[case("liquidity-solana_withdraw_liquidity")]
fn test_execution_actions_only_in_execute(#[case] key: &str) {
    assert_eq!(GatedAction::from_tool_key(key), Some(GatedAction::Execution));
    assert!(!is_tool_allowed(key, &GateOptions::new(FlowMode::Explore)));
    assert!(!is_tool_allowed(key, &GateOptions::new(FlowMode::Decide).with_wallet_address(true)));
    assert!(is_tool_allowed(key, &GateOptions::new(FlowMode::Execute)));
}

#[test]
fn test_wallet_connect_requires_permission() {
    let key = "basewallet-base_get_wallet_address";
    assert!(!is_tool_allowed(key, &GateOptions::new(FlowMode::Execute)));
    assert!(is_tool_allowed(
        key,
        &GateOptions::new(FlowMode::Explore).with_wallet_connect(true)
    ));
}

#[test]
fn test_explore_without_wallet() {
    let gated = gate_tools_by_mode(full_toolset(), &GateOptions::new(FlowMode::Explore));
    assert_eq!(
        keys(&gated),
        vec![
            "lending-solana_lending_yields",
            "staking-solana_liquid_staking_yields",
            "baselending-base_lending_yields",
            "bsclending-bsc_lending_yields",
            "market-solana_token_price",
            "knowledge-search_docs",
        ]
    );
}

#[test]
fn test_execute_with_wallet_keeps_order() {
    let options = GateOptions::new(FlowMode::Execute)
        .with_wallet_connect(true)
        .with_wallet_address(true);
    let gated = gate_tools_by_mode(full_toolset(), &options);

    let expected: Vec<&str> = KNOWN_KEYS
        .iter()
        .copied()
        .filter(|key| {
            !key.ends_with("ui_decision_response")
                && !YIELD_ACTIONS.iter().any(|a| key.ends_with(a))
        })
        .collect();
    assert_eq!(keys(&gated), expected);
    // Definitions travel with their keys
    assert_eq!(gated.get("trading-solana_trade"), Some(&11));
}

#[test]
fn test_empty_toolset() {
    let gated = gate_tools_by_mode(ToolSet::<()>::new(), &GateOptions::new(FlowMode::Decide));
    assert!(gated.is_empty());
}

fn mode_strategy() -> impl Strategy<Value = FlowMode> {
    prop_oneof![
        Just(FlowMode::Explore),
        Just(FlowMode::Decide),
        Just(FlowMode::Execute),
    ]
}

prop_compose! {
    fn arb_options()(
        mode in mode_strategy(),
        allow_wallet_connect in any::<bool>(),
        has_wallet_address in any::<bool>(),
    ) -> GateOptions {
        GateOptions::new(mode)
            .with_wallet_connect(allow_wallet_connect)
            .with_wallet_address(has_wallet_address)
    }
}

prop_compose! {
    fn arb_toolset()(
        known in proptest::sample::subsequence(KNOWN_KEYS.to_vec(), 0..=KNOWN_KEYS.len()),
        extra in proptest::collection::vec("[a-z]{1,8}-[a-z_]{1,16}", 0..4),
    ) -> ToolSet<usize> {
        known
            .into_iter()
            .map(str::to_string)
            .chain(extra)
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect()
    }
}

proptest! {
    #[test]
    fn prop_gate_is_idempotent(tools in arb_toolset(), options in arb_options()) {
        let once = gate_tools_by_mode(tools, &options);
        let twice = gate_tools_by_mode(once.clone(), &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_gate_never_grows(tools in arb_toolset(), options in arb_options()) {
        let before = tools.len();
        let gated = gate_tools_by_mode(tools, &options);
        prop_assert!(gated.len() <= before);
    }

    #[test]
    fn prop_execute_with_wallet_is_least_restrictive(tools in arb_toolset()) {
        let open = GateOptions::new(FlowMode::Execute)
            .with_wallet_connect(true)
            .with_wallet_address(true);
        let executing = gate_tools_by_mode(tools.clone(), &open);
        let exploring = gate_tools_by_mode(tools, &GateOptions::new(FlowMode::Explore));

        // Yield listings are the one category execute mode hides
        for key in exploring.keys() {
            if GatedAction::from_tool_key(key) == Some(GatedAction::YieldListing) {
                continue;
            }
            prop_assert!(executing.contains_key(key), "{} missing in execute mode", key);
        }
    }
}
