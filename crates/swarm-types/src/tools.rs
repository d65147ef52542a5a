//! Action name constants for the swarm
//!
//! Tool keys are `<agentPrefix>-<actionName>`; everything that inspects a
//! tool key matches on the action-name suffix so that the same logical action
//! exposed under Solana, Base and BSC prefixes is treated identically.

use crate::agent::AgentKey;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Decision-response UI action, shown only while deciding
pub const UI_DECISION_RESPONSE_ACTION: &str = "ui_decision_response";

pub const SOLANA_LENDING_YIELDS_ACTION: &str = "solana_lending_yields";
pub const SOLANA_LIQUID_STAKING_YIELDS_ACTION: &str = "solana_liquid_staking_yields";
pub const SOLANA_LEND_ACTION: &str = "solana_lend";
pub const SOLANA_WITHDRAW_ACTION: &str = "solana_withdraw";
pub const SOLANA_STAKE_ACTION: &str = "solana_stake";
pub const SOLANA_UNSTAKE_ACTION: &str = "solana_unstake";
pub const SOLANA_TRADE_ACTION: &str = "solana_trade";
pub const SOLANA_TRANSFER_ACTION: &str = "solana_transfer";
pub const SOLANA_DEPOSIT_LIQUIDITY_ACTION: &str = "solana_deposit_liquidity";
pub const SOLANA_WITHDRAW_LIQUIDITY_ACTION: &str = "solana_withdraw_liquidity";
pub const SOLANA_BALANCE_ACTION: &str = "solana_balance";
pub const SOLANA_ALL_BALANCES_ACTION: &str = "solana_all_balances";
pub const SOLANA_GET_WALLET_ADDRESS_ACTION: &str = "solana_get_wallet_address";

pub const BASE_LENDING_YIELDS_ACTION: &str = "base_lending_yields";
pub const BASE_LEND_ACTION: &str = "base_lend";
pub const BASE_WITHDRAW_ACTION: &str = "base_withdraw";
pub const BASE_STAKE_ACTION: &str = "base_stake";
pub const BASE_UNSTAKE_ACTION: &str = "base_unstake";
pub const BASE_TRADE_ACTION: &str = "base_trade";
pub const BASE_TRANSFER_ACTION: &str = "base_transfer";
pub const BASE_DEPOSIT_LIQUIDITY_ACTION: &str = "base_deposit_liquidity";
pub const BASE_WITHDRAW_LIQUIDITY_ACTION: &str = "base_withdraw_liquidity";
pub const BASE_BALANCE_ACTION: &str = "base_balance";
pub const BASE_ALL_BALANCES_ACTION: &str = "base_all_balances";
pub const BASE_GET_WALLET_ADDRESS_ACTION: &str = "base_get_wallet_address";

pub const BSC_LENDING_YIELDS_ACTION: &str = "bsc_lending_yields";
pub const BSC_LEND_ACTION: &str = "bsc_lend";
pub const BSC_WITHDRAW_ACTION: &str = "bsc_withdraw";
pub const BSC_STAKE_ACTION: &str = "bsc_stake";
pub const BSC_UNSTAKE_ACTION: &str = "bsc_unstake";
pub const BSC_TRADE_ACTION: &str = "bsc_trade";
pub const BSC_TRANSFER_ACTION: &str = "bsc_transfer";
pub const BSC_DEPOSIT_LIQUIDITY_ACTION: &str = "bsc_deposit_liquidity";
pub const BSC_WITHDRAW_LIQUIDITY_ACTION: &str = "bsc_withdraw_liquidity";
pub const BSC_BALANCE_ACTION: &str = "bsc_balance";
pub const BSC_ALL_BALANCES_ACTION: &str = "bsc_all_balances";
pub const BSC_GET_WALLET_ADDRESS_ACTION: &str = "bsc_get_wallet_address";

/// Read-only actions that list lending or staking pools
pub const YIELD_ACTIONS: &[&str] = &[
    SOLANA_LENDING_YIELDS_ACTION,
    SOLANA_LIQUID_STAKING_YIELDS_ACTION,
    BASE_LENDING_YIELDS_ACTION,
    BSC_LENDING_YIELDS_ACTION,
];

/// Actions that hand the user a way to connect a wallet
pub const WALLET_CONNECT_ACTIONS: &[&str] = &[
    SOLANA_GET_WALLET_ADDRESS_ACTION,
    BASE_GET_WALLET_ADDRESS_ACTION,
    BSC_GET_WALLET_ADDRESS_ACTION,
];

/// State-changing actions on every chain
pub const EXECUTION_ACTIONS: &[&str] = &[
    SOLANA_LEND_ACTION,
    SOLANA_WITHDRAW_ACTION,
    SOLANA_STAKE_ACTION,
    SOLANA_UNSTAKE_ACTION,
    SOLANA_TRANSFER_ACTION,
    SOLANA_TRADE_ACTION,
    SOLANA_DEPOSIT_LIQUIDITY_ACTION,
    SOLANA_WITHDRAW_LIQUIDITY_ACTION,
    BASE_LEND_ACTION,
    BASE_WITHDRAW_ACTION,
    BASE_STAKE_ACTION,
    BASE_UNSTAKE_ACTION,
    BASE_TRANSFER_ACTION,
    BASE_TRADE_ACTION,
    BASE_DEPOSIT_LIQUIDITY_ACTION,
    BASE_WITHDRAW_LIQUIDITY_ACTION,
    BSC_LEND_ACTION,
    BSC_WITHDRAW_ACTION,
    BSC_STAKE_ACTION,
    BSC_UNSTAKE_ACTION,
    BSC_TRANSFER_ACTION,
    BSC_TRADE_ACTION,
    BSC_DEPOSIT_LIQUIDITY_ACTION,
    BSC_WITHDRAW_LIQUIDITY_ACTION,
];

/// Actions whose output depends on a known wallet
pub const WALLET_BALANCE_ACTIONS: &[&str] = &[
    SOLANA_BALANCE_ACTION,
    SOLANA_ALL_BALANCES_ACTION,
    BASE_BALANCE_ACTION,
    BASE_ALL_BALANCES_ACTION,
    BSC_BALANCE_ACTION,
    BSC_ALL_BALANCES_ACTION,
];

/// Whether a tool key ends with any of the given action names
pub fn matches_any_action(tool_key: &str, actions: &[&str]) -> bool {
    actions.iter().any(|action| tool_key.ends_with(action))
}

/// Gate-relevant category of a tool key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GatedAction {
    DecisionResponse,
    YieldListing,
    WalletConnect,
    Execution,
    WalletBalance,
}

impl GatedAction {
    /// Categorize a tool key by its action-name suffix
    pub fn from_tool_key(tool_key: &str) -> Option<Self> {
        if tool_key.ends_with(UI_DECISION_RESPONSE_ACTION) {
            Some(GatedAction::DecisionResponse)
        } else if matches_any_action(tool_key, YIELD_ACTIONS) {
            Some(GatedAction::YieldListing)
        } else if matches_any_action(tool_key, WALLET_CONNECT_ACTIONS) {
            Some(GatedAction::WalletConnect)
        } else if matches_any_action(tool_key, EXECUTION_ACTIONS) {
            Some(GatedAction::Execution)
        } else if matches_any_action(tool_key, WALLET_BALANCE_ACTIONS) {
            Some(GatedAction::WalletBalance)
        } else {
            None
        }
    }
}

/// Which pool category a Solana yields listing covers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum YieldDomain {
    Lending,
    Staking,
}

impl YieldDomain {
    /// Action name of the yields listing for this domain
    pub fn action(&self) -> &'static str {
        match self {
            YieldDomain::Lending => SOLANA_LENDING_YIELDS_ACTION,
            YieldDomain::Staking => SOLANA_LIQUID_STAKING_YIELDS_ACTION,
        }
    }

    /// Agent that presents this domain's pools
    pub fn agent(&self) -> AgentKey {
        match self {
            YieldDomain::Lending => AgentKey::Lending,
            YieldDomain::Staking => AgentKey::Staking,
        }
    }

    /// Domain of a Solana yields tool key, if it is one
    pub fn from_tool_name(tool_name: &str) -> Option<Self> {
        if tool_name.ends_with(SOLANA_LIQUID_STAKING_YIELDS_ACTION) {
            Some(YieldDomain::Staking)
        } else if tool_name.ends_with(SOLANA_LENDING_YIELDS_ACTION) {
            Some(YieldDomain::Lending)
        } else {
            None
        }
    }
}

/// State-changing Solana actions whose failed attempt can be retried verbatim
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResumableAction {
    Lend,
    Withdraw,
    Stake,
    Unstake,
    Trade,
    Transfer,
}

impl ResumableAction {
    /// Action name for this kind
    pub fn action(&self) -> &'static str {
        match self {
            ResumableAction::Lend => SOLANA_LEND_ACTION,
            ResumableAction::Withdraw => SOLANA_WITHDRAW_ACTION,
            ResumableAction::Stake => SOLANA_STAKE_ACTION,
            ResumableAction::Unstake => SOLANA_UNSTAKE_ACTION,
            ResumableAction::Trade => SOLANA_TRADE_ACTION,
            ResumableAction::Transfer => SOLANA_TRANSFER_ACTION,
        }
    }

    /// Resumable kind of a tool key, if it is one
    pub fn from_tool_name(tool_name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|kind| tool_name.ends_with(kind.action()))
    }

    /// Agent inferred from the action kind when the tool prefix is unknown
    pub fn fallback_agent(&self) -> AgentKey {
        match self {
            ResumableAction::Stake | ResumableAction::Unstake => AgentKey::Staking,
            ResumableAction::Trade => AgentKey::Trading,
            ResumableAction::Transfer => AgentKey::Wallet,
            ResumableAction::Lend | ResumableAction::Withdraw => AgentKey::Lending,
        }
    }
}
