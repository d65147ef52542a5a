//! Prompt Templates for intent classification

use serde_json::{json, Value};
use swarm_types::Chain;

/// Name the intent schema is registered under
pub const INTENT_SCHEMA_NAME: &str = "intent";

/// Template for the intent classification call
pub struct IntentPromptTemplate;

impl IntentPromptTemplate {
    /// System prompt for classifying the latest user message(s)
    pub fn system_prompt(chain: Chain) -> String {
        format!(
            r#"You classify the latest user message in a DeFi assistant chat on {chain}.

Fields:
- goal: "execute" (perform an action now), "decide" (pick between options), "learn" (explain a concept), "explore" (browse or look up data), "unknown".
- domain: "lending", "staking", "portfolio", "liquidity", "market", "token-analysis", "knowledge", "unknown".
- assetScope: "sol", "stablecoins", "unknown".
- decisionStrength: "none", "soft" (open to a suggestion), "strong" (explicitly asks which to choose).
- explicitExecution: true only when the user clearly instructs an action (deposit, stake, withdraw, send).
- explicitTrading: true only for swaps, buys and sells.
- confidence: number between 0 and 1.
- needsWalletForPersonalization: true when the answer depends on the user's balances or positions.

Respond with a single JSON object. No prose. Respond in English only."#
        )
    }

    /// JSON schema of `Intent`
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "required": [
                "goal", "domain", "assetScope", "decisionStrength",
                "explicitExecution", "explicitTrading", "confidence",
                "needsWalletForPersonalization"
            ],
            "properties": {
                "goal": { "type": "string", "enum": ["execute", "decide", "learn", "explore", "unknown"] },
                "domain": {
                    "type": "string",
                    "enum": ["lending", "staking", "portfolio", "liquidity", "market", "token-analysis", "knowledge", "unknown"]
                },
                "assetScope": { "type": "string", "enum": ["sol", "stablecoins", "unknown"] },
                "decisionStrength": { "type": "string", "enum": ["none", "soft", "strong"] },
                "explicitExecution": { "type": "boolean" },
                "explicitTrading": { "type": "boolean" },
                "confidence": { "type": "number", "minimum": 0, "maximum": 1 },
                "needsWalletForPersonalization": { "type": "boolean" }
            }
        })
    }
}
