//! Tool gating by flow mode and wallet state
//!
//! Filters an agent's tool set down to what the model may call this turn.
//! Matching is by action-name suffix, so the rules apply identically to the
//! Solana, Base and BSC variants of an action.

use serde::{Deserialize, Serialize};
use swarm_types::tools::GatedAction;
use swarm_types::{FlowMode, ToolSet};
use tracing::debug;

/// Inputs the gate decides on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateOptions {
    pub mode: FlowMode,
    pub allow_wallet_connect: bool,
    pub has_wallet_address: bool,
}

impl GateOptions {
    pub fn new(mode: FlowMode) -> Self {
        Self {
            mode,
            allow_wallet_connect: false,
            has_wallet_address: false,
        }
    }

    /// Set wallet-connect permission and return self for chaining
    pub fn with_wallet_connect(mut self, allow: bool) -> Self {
        self.allow_wallet_connect = allow;
        self
    }

    /// Set wallet address availability and return self for chaining
    pub fn with_wallet_address(mut self, has_wallet_address: bool) -> Self {
        self.has_wallet_address = has_wallet_address;
        self
    }
}

/// Whether a single tool key survives the gate
pub fn is_tool_allowed(tool_key: &str, options: &GateOptions) -> bool {
    let executing = options.mode == FlowMode::Execute;
    match GatedAction::from_tool_key(tool_key) {
        Some(GatedAction::DecisionResponse) => options.mode == FlowMode::Decide,
        Some(GatedAction::YieldListing) => !executing,
        Some(GatedAction::WalletConnect) => options.allow_wallet_connect,
        Some(GatedAction::Execution) => executing,
        Some(GatedAction::WalletBalance) => {
            executing || options.has_wallet_address || options.allow_wallet_connect
        }
        None => true,
    }
}

/// Filter a tool set, preserving order
pub fn gate_tools_by_mode<T>(tools: ToolSet<T>, options: &GateOptions) -> ToolSet<T> {
    let before = tools.len();
    let gated: ToolSet<T> = tools
        .into_iter()
        .filter(|(key, _)| is_tool_allowed(key, options))
        .collect();
    debug!(
        mode = %options.mode,
        before,
        after = gated.len(),
        "Gated tools"
    );
    gated
}
