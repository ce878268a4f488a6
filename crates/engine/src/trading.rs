//! Simulated trade policy and position sizing

use crate::decision::{DecisionKind, TradeDecision};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// A BUY must be strictly above this confidence (0–100) to simulate a trade
pub const TRADE_CONFIDENCE_THRESHOLD: f64 = 70.0;

pub const TRADE_ACTION_BUY: &str = "BUY";
pub const TRADE_STATUS_EXECUTED: &str = "executed";

pub const MIN_PORTFOLIO_VALUE: Decimal = Decimal::ONE_HUNDRED;
pub const MIN_POSITION_PCT: Decimal = Decimal::ONE;
pub const MAX_POSITION_PCT: Decimal = Decimal::TEN;

#[derive(Error, Debug, PartialEq)]
pub enum SizingError {
    #[error("portfolio value must be at least 100, got {0}")]
    PortfolioTooSmall(Decimal),

    #[error("max position must be between 1% and 10%, got {0}%")]
    PositionOutOfRange(Decimal),

    #[error("position size for portfolio {0} is too large to compute")]
    AmountOverflow(Decimal),
}

/// Portfolio size and per-trade cap, as entered on the dashboard.
/// The position amount is computed once, on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSizing {
    portfolio_value: Decimal,
    /// Percentage of the portfolio per trade (e.g. 5 = 5%)
    max_position_pct: Decimal,
    position_amount: Decimal,
}

impl Default for PositionSizing {
    fn default() -> Self {
        Self {
            portfolio_value: Decimal::from(1000),
            max_position_pct: Decimal::from(5),
            position_amount: Decimal::from(50),
        }
    }
}

impl PositionSizing {
    pub fn new(portfolio_value: Decimal, max_position_pct: Decimal) -> Result<Self, SizingError> {
        if portfolio_value < MIN_PORTFOLIO_VALUE {
            return Err(SizingError::PortfolioTooSmall(portfolio_value));
        }
        if max_position_pct < MIN_POSITION_PCT || max_position_pct > MAX_POSITION_PCT {
            return Err(SizingError::PositionOutOfRange(max_position_pct));
        }

        // portfolio × (max_position_pct / 100)
        let position_amount = portfolio_value
            .checked_mul(max_position_pct)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(SizingError::AmountOverflow(portfolio_value))?;

        Ok(Self {
            portfolio_value,
            max_position_pct,
            position_amount,
        })
    }

    pub fn portfolio_value(&self) -> Decimal {
        self.portfolio_value
    }

    pub fn max_position_pct(&self) -> Decimal {
        self.max_position_pct
    }

    pub fn position_amount(&self) -> Decimal {
        self.position_amount
    }
}

/// Only a high-confidence BUY triggers a simulated trade
pub fn warrants_trade(decision: &TradeDecision) -> bool {
    decision.decision == DecisionKind::Buy && decision.confidence > TRADE_CONFIDENCE_THRESHOLD
}
