//! Trading Desk Engine — model-backed token verdicts and simulated trades
//!
//! Provides:
//! - OpenAI-compatible chat-completion client behind the `ChatCompletion` seam
//! - Decision client producing BUY/SELL/HOLD verdicts with sentinel fallbacks
//! - Position sizing and the high-confidence BUY trade policy
//! - Analysis orchestration that records signals and trades

pub mod analysis;
pub mod api;
pub mod config;
pub mod decision;
pub mod trading;
pub mod types;

// Re-exports for convenience
pub use analysis::{AnalysisOutcome, AnalysisRequest, AnalysisService, SimulatedTrade};
pub use api::{ChatCompletion, ChatRequest, OpenAiClient};
pub use config::AiConfig;
pub use decision::{DecisionClient, DecisionError, DecisionKind, TradeDecision};
pub use trading::{warrants_trade, PositionSizing, SizingError, TRADE_CONFIDENCE_THRESHOLD};
pub use types::*;
