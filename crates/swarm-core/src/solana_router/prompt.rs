//! Prompt and schema for the model-assisted Solana routing call

use serde_json::{json, Value};
use swarm_types::tools::{SOLANA_LENDING_YIELDS_ACTION, SOLANA_LIQUID_STAKING_YIELDS_ACTION};
use swarm_types::RouterContext;

/// Name the decision schema is registered under
pub const DECISION_SCHEMA_NAME: &str = "solana_router_decision";

/// System prompt for the structured routing call
pub fn system_prompt() -> String {
    format!(
        r#"You route messages in a Solana DeFi chat to exactly one specialist agent and plan the tool calls for this turn.

Agents: recommendation, lending, staking, wallet, trading, market, token-analysis, liquidity, knowledge.
Modes: explore (browsing), decide (comparing options), execute (performing an on-chain action).
UI: "cards" shows pool cards only, "cards_then_text" shows cards followed by a short comparison, "text" is a plain answer.
Stop conditions: "none", "when_first_yields_result_received", "after_tool_plan_complete".

Yield tools:
- {lending}: lending pools. args: {{ "limit"?: number, "sortBy"?: "apy" | "tvl" }}
- {staking}: liquid staking pools. Same args.

Rules:
1. If the user asks for all pools/options/providers/cards, call the yields tool with limit 50.
2. Sort by "apy" by default. Use "tvl" only when the user asks about TVL, liquidity, size or safety.
3. If the user asks to retry ("retry", "try again") and context.lastAction has status "cancelled" or "failed", plan exactly that tool with exactly the same args, mode "execute", ui "text", stop "after_tool_plan_complete".
4. When the user refers to pools they just saw ("these", "that one") stay on the same yields tool as context.lastYield.
5. Use staking pools for stake/staking/LST questions, lending pools otherwise.
6. If no tool is needed, return an empty toolPlan with stopCondition "none".

Respond with a single JSON object matching the schema. No prose."#,
        lending = SOLANA_LENDING_YIELDS_ACTION,
        staking = SOLANA_LIQUID_STAKING_YIELDS_ACTION,
    )
}

/// User message carrying the raw text and the serialized context
pub fn user_message(text: &str, context: &RouterContext) -> String {
    let context_json =
        serde_json::to_string_pretty(context).unwrap_or_else(|_| "{}".to_string());
    format!("User message:\n{text}\n\nContext:\n{context_json}")
}

/// JSON schema of `SolanaRouterDecision`
pub fn decision_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["agent", "mode", "ui", "toolPlan", "stopCondition"],
        "properties": {
            "agent": {
                "type": "string",
                "enum": [
                    "recommendation", "lending", "staking", "wallet", "trading",
                    "market", "token-analysis", "liquidity", "knowledge"
                ]
            },
            "mode": { "type": "string", "enum": ["explore", "decide", "execute"] },
            "ui": { "type": "string", "enum": ["cards", "cards_then_text", "text"] },
            "toolPlan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["tool"],
                    "properties": {
                        "tool": { "type": "string" },
                        "args": { "type": "object" }
                    }
                }
            },
            "stopCondition": {
                "type": "string",
                "enum": ["none", "when_first_yields_result_received", "after_tool_plan_complete"]
            }
        }
    })
}
