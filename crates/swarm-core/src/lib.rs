//! Swarm Core
//!
//! Conversational routing for the DeFi agent swarm chat: derives the flow
//! mode from the classified intent and the message history, routes each turn
//! to a specialist agent, gates the agent's tools by mode and wallet state,
//! and plans tool calls for the Solana chat surface with a deterministic
//! fallback behind an optional model call.

pub mod classifier;
pub mod config;
pub mod error;
pub mod flow_state;
pub mod history;
pub mod intent_router;
pub mod llm;
pub mod pipeline;
pub mod solana_router;
pub mod tool_gate;
pub mod user_error;

// Re-export key types for convenience
pub use classifier::{IntentClassifier, LlmIntentClassifier};
pub use config::RouterConfig;
pub use error::{RouterError, RouterResult};
pub use flow_state::{
    derive_flow_state_from_conversation, derive_flow_state_from_intent, mode_from_intent,
};
pub use history::{extract_tool_invocations, latest_user_text};
pub use intent_router::route_intent;
pub use llm::{ChatCompletionsClient, LlmClient, LlmMessage, StructuredRequest};
pub use pipeline::{AgentToolbox, TurnPlan, TurnRouter, WalletState};
pub use solana_router::{
    build_solana_router_context, get_solana_router_fallback_decision, looks_like_retry,
    SolanaRouter,
};
pub use tool_gate::{gate_tools_by_mode, GateOptions};
pub use user_error::user_facing_error_message;
