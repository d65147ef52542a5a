//! Shared helpers for swarm-core tests
#![allow(dead_code)]

pub mod mock_llm_client;

use serde_json::{json, Value};
use swarm_types::{ChatMessage, ToolInvocation};

#[allow(unused_imports)]
pub use mock_llm_client::MockLlmClient;

/// Initialize tracing once for `cargo test -- --nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("swarm_core=debug")
        .with_test_writer()
        .try_init();
}

/// Pool records shaped like a yields tool result body
pub fn sample_pools(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "symbol": format!("TOKEN{i}"),
                    "project": "kamino-lend",
                    "apy": 5.0 + i as f64,
                    "tvlUsd": 1_000_000.0 * (i + 1) as f64,
                    "underlyingTokens": [format!("Mint{i}111111111111111111111111111111111")],
                    "poolMeta": "ignored"
                })
            })
            .collect(),
    )
}

/// Assistant message carrying a completed yields listing
pub fn yields_message(tool: &str, args: Value, pool_count: usize) -> ChatMessage {
    ChatMessage::assistant("").with_tool_invocation(
        ToolInvocation::new(tool)
            .with_args(args)
            .with_result(json!({ "message": "pools", "body": sample_pools(pool_count) })),
    )
}

/// Assistant message carrying an action with a result status
pub fn action_message(tool: &str, args: Value, status: &str) -> ChatMessage {
    ChatMessage::assistant("").with_tool_invocation(
        ToolInvocation::new(tool)
            .with_args(args)
            .with_result(json!({ "message": "action", "body": { "status": status } })),
    )
}
