//! Dashboard aggregates over both logs

use super::{SignalRepository, TradeRepository};
use crate::DbResult;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Scalar metrics shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_signals: i64,
    pub total_trades: i64,
    /// Average of non-zero signal confidences, 0.0–1.0
    pub avg_confidence: Option<f64>,
}

pub struct StatsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn dashboard_stats(&self) -> DbResult<DashboardStats> {
        let signals = SignalRepository::new(self.pool);
        let trades = TradeRepository::new(self.pool);

        Ok(DashboardStats {
            total_signals: signals.count().await?,
            total_trades: trades.count().await?,
            avg_confidence: signals.average_confidence().await?,
        })
    }
}
