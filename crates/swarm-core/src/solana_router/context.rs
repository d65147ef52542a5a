//! Router context reconstruction from message history

use crate::history::invocations_newest_first;
use serde_json::Value;
use swarm_types::tools::{ResumableAction, YieldDomain};
use swarm_types::{
    ChatMessage, LastAction, LastYield, RouterContext, YieldPoolSample, MAX_POOL_SAMPLES,
};
use tracing::debug;

/// Annotation key carrying a previously cancelled or failed action
pub const RESUME_ACTION_ANNOTATION: &str = "resumeAction";

/// Rebuild the router context from the tail of the conversation.
///
/// A `resumeAction` annotation on the latest message seeds `lastAction`;
/// the history scan then fills whatever is still empty and stops as soon
/// as both slots are set.
pub fn build_solana_router_context(messages: &[ChatMessage]) -> RouterContext {
    let mut context = RouterContext {
        last_yield: None,
        last_action: messages.last().and_then(resume_action_from_annotations),
    };

    for invocation in invocations_newest_first(messages) {
        if context.is_complete() {
            break;
        }
        let tool = invocation.tool_name.as_str();

        if context.last_yield.is_none() && YieldDomain::from_tool_name(tool).is_some() {
            let pools = invocation
                .result_body()
                .map(summarize_yield_pools)
                .filter(|pools| !pools.is_empty());
            context.last_yield = Some(LastYield {
                tool: tool.to_string(),
                args: invocation.args.clone(),
                pools,
            });
        } else if context.last_action.is_none() && ResumableAction::from_tool_name(tool).is_some() {
            let status = invocation
                .result_body()
                .and_then(|body| body.get("status"))
                .and_then(Value::as_str)
                .map(str::to_string);
            context.last_action = Some(LastAction {
                tool: tool.to_string(),
                args: invocation.args.clone(),
                status,
            });
        }
    }

    debug!(
        last_yield = context.last_yield.as_ref().map(|y| y.tool.as_str()),
        last_action = context.last_action.as_ref().map(|a| a.tool.as_str()),
        "Built Solana router context"
    );
    context
}

/// Read a resumable action out of a message's annotations.
///
/// The annotation stands for an attempt that did not complete, so a missing
/// status is read as `cancelled`.
pub fn resume_action_from_annotations(message: &ChatMessage) -> Option<LastAction> {
    message.annotations.iter().rev().find_map(|annotation| {
        let resume = annotation.get(RESUME_ACTION_ANNOTATION)?;
        let tool = resume.get("toolName").and_then(Value::as_str)?;
        ResumableAction::from_tool_name(tool)?;
        let status = resume
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("cancelled")
            .to_string();
        Some(LastAction {
            tool: tool.to_string(),
            args: resume.get("args").filter(|args| !args.is_null()).cloned(),
            status: Some(status),
        })
    })
}

/// Project a yields result body into at most six pool samples.
///
/// Accepts the pool list directly or nested under `pools` or `data`.
pub fn summarize_yield_pools(body: &Value) -> Vec<YieldPoolSample> {
    let pools = body
        .as_array()
        .or_else(|| body.get("pools").and_then(Value::as_array))
        .or_else(|| body.get("data").and_then(Value::as_array));

    let Some(pools) = pools else {
        return Vec::new();
    };

    pools
        .iter()
        .filter(|pool| pool.is_object())
        .take(MAX_POOL_SAMPLES)
        .map(|pool| YieldPoolSample {
            symbol: string_field(pool, &["symbol"]),
            project: string_field(pool, &["project", "protocol"]),
            apy: number_field(pool, &["apy", "apyBase"]),
            tvl_usd: number_field(pool, &["tvlUsd", "tvl"]),
            mint: string_field(pool, &["mint", "tokenMintAddress"]).or_else(|| {
                pool.get("underlyingTokens")
                    .and_then(Value::as_array)
                    .and_then(|tokens| tokens.first())
                    .and_then(Value::as_str)
                    .map(str::to_string)
            }),
        })
        .collect()
}

fn string_field(pool: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| pool.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn number_field(pool: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        let value = pool.get(*key)?;
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    })
}
