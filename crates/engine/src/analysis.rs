//! Analysis orchestration — verdict, signal row, and optional simulated trade

use crate::decision::{DecisionClient, TradeDecision};
use crate::trading::{warrants_trade, PositionSizing, TRADE_ACTION_BUY, TRADE_STATUS_EXECUTED};
use crate::types::{SignalOrigin, TokenFeatures};
use anyhow::Result;
use persistence::repository::{SignalRepository, TradeRepository};
use persistence::SqlitePool;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::{error, info, warn};

/// One analysis to run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub features: TokenFeatures,
    pub origin: SignalOrigin,
    /// `None` for quick tests, which never trade
    pub sizing: Option<PositionSizing>,
}

/// A simulated trade recorded as part of an analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulatedTrade {
    pub trade_id: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub token: String,
    pub features: TokenFeatures,
    pub result: TradeDecision,
    pub signal_id: i64,
    pub trade: Option<SimulatedTrade>,
    /// Set when the verdict warranted a trade but the trade row could not
    /// be written. The signal is recorded either way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_error: Option<String>,
}

/// Runs analyses and writes their results to the store
#[derive(Clone)]
pub struct AnalysisService {
    decisions: DecisionClient,
    pool: SqlitePool,
}

impl AnalysisService {
    pub fn new(decisions: DecisionClient, pool: SqlitePool) -> Self {
        Self { decisions, pool }
    }

    pub fn decisions(&self) -> &DecisionClient {
        &self.decisions
    }

    /// Ask for a verdict, record it as a signal (sentinels included), and
    /// record a simulated trade when the verdict warrants one.
    ///
    /// Fails only when the signal itself cannot be recorded. A failed trade
    /// write is reported through `AnalysisOutcome::trade_error`.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome> {
        let AnalysisRequest {
            features,
            origin,
            sizing,
        } = request;
        let token = features.name.clone();

        let result = self.decisions.analyze(&features).await;
        let raw = serde_json::to_string(&result)?;

        let signal_id = SignalRepository::new(&self.pool)
            .record_signal(&token, origin.as_str(), result.confidence / 100.0, &raw)
            .await?;

        if result.decision.is_sentinel() {
            warn!(
                %token,
                decision = %result.decision,
                reasoning = %result.reasoning,
                "Recorded sentinel verdict"
            );
        }

        let mut trade = None;
        let mut trade_error = None;
        if let Some(sizing) = sizing.filter(|_| warrants_trade(&result)) {
            let amount = sizing.position_amount().to_f64().unwrap_or_default();
            match TradeRepository::new(&self.pool)
                .record_trade(&token, TRADE_ACTION_BUY, amount, 0.0, TRADE_STATUS_EXECUTED)
                .await
            {
                Ok(trade_id) => {
                    info!(%token, amount, trade_id, "Simulated trade executed");
                    trade = Some(SimulatedTrade { trade_id, amount });
                }
                Err(e) => {
                    error!(%token, amount, signal_id, "Failed to record simulated trade: {}", e);
                    trade_error = Some(format!(
                        "Signal #{} recorded, but the simulated trade was not: {}",
                        signal_id, e
                    ));
                }
            }
        }

        info!(
            %token,
            %origin,
            decision = %result.decision,
            signal_id,
            traded = trade.is_some(),
            "Analysis recorded"
        );

        Ok(AnalysisOutcome {
            token,
            features,
            result,
            signal_id,
            trade,
            trade_error,
        })
    }
}
