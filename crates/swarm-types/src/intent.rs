//! Classified intent for a single chat turn
//!
//! An `Intent` is produced once per turn by the classifier and consumed by
//! the flow-state deriver and the intent router within the same request.
//! Unrecognized strings from the classifier deserialize to the `Unknown`
//! variants rather than failing the turn.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// What the user is trying to accomplish
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Goal {
    Execute,
    Decide,
    Learn,
    Explore,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Task domain the message is about
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Domain {
    Lending,
    Staking,
    Portfolio,
    Liquidity,
    Market,
    TokenAnalysis,
    Knowledge,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Asset family the message is scoped to
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetScope {
    Sol,
    Stablecoins,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How strongly the user asks for a recommendation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DecisionStrength {
    Soft,
    Strong,
    #[default]
    #[serde(other)]
    None,
}

/// Chat surface the turn originates from
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    #[default]
    Solana,
    Base,
    Bsc,
}

/// Structured classification of the latest user message(s)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub domain: Domain,
    #[serde(default)]
    pub asset_scope: AssetScope,
    #[serde(default)]
    pub decision_strength: DecisionStrength,
    #[serde(default)]
    pub explicit_execution: bool,
    #[serde(default)]
    pub explicit_trading: bool,
    /// Classifier confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub needs_wallet_for_personalization: bool,
}

impl Default for Intent {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Intent {
    /// An intent with no signal at all, used when classification is unavailable
    pub fn unknown() -> Self {
        Self {
            goal: Goal::Unknown,
            domain: Domain::Unknown,
            asset_scope: AssetScope::Unknown,
            decision_strength: DecisionStrength::None,
            explicit_execution: false,
            explicit_trading: false,
            confidence: 0.0,
            needs_wallet_for_personalization: false,
        }
    }

    /// Set goal and return self for chaining
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    /// Set domain and return self for chaining
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Set asset scope and return self for chaining
    pub fn with_asset_scope(mut self, asset_scope: AssetScope) -> Self {
        self.asset_scope = asset_scope;
        self
    }

    /// Set decision strength and return self for chaining
    pub fn with_decision_strength(mut self, strength: DecisionStrength) -> Self {
        self.decision_strength = strength;
        self
    }

    /// Set the explicit execution flag and return self for chaining
    pub fn with_explicit_execution(mut self, explicit: bool) -> Self {
        self.explicit_execution = explicit;
        self
    }

    /// Set the explicit trading flag and return self for chaining
    pub fn with_explicit_trading(mut self, explicit: bool) -> Self {
        self.explicit_trading = explicit;
        self
    }

    /// Set confidence, clamped to [0, 1], and return self for chaining
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = clamp_confidence(confidence);
        self
    }

    /// Whether the user asked to perform an action
    pub fn wants_execution(&self) -> bool {
        self.goal == Goal::Execute || self.explicit_execution
    }

    /// Whether the user asked for a recommendation or comparison
    pub fn wants_decision(&self) -> bool {
        self.goal == Goal::Decide || self.decision_strength != DecisionStrength::None
    }
}

/// Clamp a confidence score into [0, 1]; NaN becomes 0
pub fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
