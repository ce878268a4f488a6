//! Shared types for the decision engine

use serde::{Deserialize, Serialize};

/// The four numeric features sent to the model, plus the token name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenFeatures {
    pub name: String,
    /// Price in USD
    pub price: f64,
    /// Liquidity in USD
    pub liquidity: u64,
    /// 24h volume in USD
    pub volume: u64,
    pub holders: u64,
}

/// Where an analysis request came from, stored as the signal's `signal_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalOrigin {
    /// Quick test from the sidebar with fixed demo data
    AiAnalysis,
    /// Analysis of a token picked from the selector
    ManualAnalysis,
}

impl SignalOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalOrigin::AiAnalysis => "ai_analysis",
            SignalOrigin::ManualAnalysis => "manual_analysis",
        }
    }
}

impl std::fmt::Display for SignalOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
