//! Text heuristics for the Solana router fallback

use std::collections::HashSet;

const POOL_TOKENS: &[&str] = &[
    "POOL", "POOLS", "OPTION", "OPTIONS", "PROVIDER", "PROVIDERS", "CARD", "CARDS",
];
const GENERIC_POOL_TOKENS: &[&str] = &["POOL", "POOLS", "OPTION", "OPTIONS"];
const YIELD_TOKENS: &[&str] = &["APY", "YIELD", "APR"];
const HIGHEST_TOKENS: &[&str] = &["HIGHEST", "BEST", "TOP", "MOST", "MAX", "LARGEST"];
const STAKING_TOKENS: &[&str] = &["STAKE", "STAKING", "LST"];
const THESE_PHRASES: &[&str] = &["out of these", "of these"];
const POOL_REFERENCE_PHRASES: &[&str] = &["among these"];

/// Split text into uppercase runs of `[A-Za-z0-9_]`
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Whether the user asks to retry the previous action.
///
/// Tolerates the common misspelling "agin".
pub fn looks_like_retry(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("retry")
        || lower.contains("try again")
        || lower.contains("try ag")
        || (lower.contains("try") && (lower.contains("again") || lower.contains("agin")))
}

/// Signals extracted from one user message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSignals {
    /// `ALL` together with pool/option/provider/card
    pub asks_all: bool,
    /// TVL, "total value locked" or liquidity
    pub asks_tvl: bool,
    /// APY, yield or APR
    pub asks_yield: bool,
    /// highest, best, top and friends
    pub asks_highest: bool,
    /// pool/option tokens, "among these" or an "of these" phrase
    pub references_pools: bool,
    /// "out of these" / "of these" phrasing
    pub refers_to_these: bool,
    /// stake, staking or LST
    pub mentions_staking: bool,
}

impl TextSignals {
    pub fn from_text(text: &str) -> Self {
        let tokens: HashSet<String> = tokenize(text).into_iter().collect();
        let has = |candidates: &[&str]| candidates.iter().any(|c| tokens.contains(*c));
        let lower = text.to_lowercase();
        let refers_to_these = THESE_PHRASES.iter().any(|phrase| lower.contains(phrase));

        Self {
            asks_all: tokens.contains("ALL") && has(POOL_TOKENS),
            asks_tvl: tokens.contains("TVL")
                || lower.contains("total value locked")
                || tokens.contains("LIQUIDITY"),
            asks_yield: has(YIELD_TOKENS),
            asks_highest: has(HIGHEST_TOKENS),
            references_pools: has(GENERIC_POOL_TOKENS)
                || refers_to_these
                || POOL_REFERENCE_PHRASES
                    .iter()
                    .any(|phrase| lower.contains(phrase)),
            refers_to_these,
            mentions_staking: has(STAKING_TOKENS),
        }
    }

    /// Whether anything yield-related fired
    pub fn wants_yields(&self) -> bool {
        self.asks_all
            || self.asks_tvl
            || self.asks_yield
            || self.asks_highest
            || self.references_pools
    }
}
