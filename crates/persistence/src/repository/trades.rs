//! Trades repository — simulated executions, never updated after insert

use crate::{now_timestamp, DbResult};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Default number of rows returned by [`TradeRepository::recent_trades`]
pub const DEFAULT_RECENT_TRADES: i64 = 10;

/// A persisted simulated trade
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeRecord {
    pub id: i64,
    pub timestamp: String,
    pub token: String,
    pub action: String,
    pub amount: f64,
    pub profit: f64,
    pub status: String,
}

/// Repository for simulated trades
pub struct TradeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TradeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a trade stamped with the current time, returning its id
    pub async fn record_trade(
        &self,
        token: &str,
        action: &str,
        amount: f64,
        profit: f64,
        status: &str,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            r#"INSERT INTO trades (timestamp, token, action, amount, profit, status)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(now_timestamp())
        .bind(token)
        .bind(action)
        .bind(amount)
        .bind(profit)
        .bind(status)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent trades, newest first
    pub async fn recent_trades(&self, limit: i64) -> DbResult<Vec<TradeRecord>> {
        let records = sqlx::query_as::<_, TradeRecord>(
            r#"SELECT id, timestamp, token, action, amount, profit, status
               FROM trades
               ORDER BY timestamp DESC, id DESC
               LIMIT ?1"#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Total number of trades
    pub async fn count(&self) -> DbResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trades")
            .fetch_one(self.pool)
            .await?;

        Ok(row.0)
    }
}
