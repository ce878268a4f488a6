//! Signals repository — one row per decision request

use crate::{now_timestamp, DbResult};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Default number of rows returned by [`SignalRepository::recent_signals`]
pub const DEFAULT_RECENT_SIGNALS: i64 = 20;

/// A persisted decision signal
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SignalRecord {
    pub id: i64,
    pub timestamp: String,
    pub token: String,
    pub signal_type: String,
    /// Model confidence rescaled to 0.0–1.0
    pub confidence: f64,
    /// Serialized JSON of the full verdict
    pub ai_decision: String,
}

/// Repository for decision signals
pub struct SignalRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SignalRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a signal stamped with the current time, returning its id
    pub async fn record_signal(
        &self,
        token: &str,
        signal_type: &str,
        confidence: f64,
        ai_decision: &str,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            r#"INSERT INTO signals (timestamp, token, signal_type, confidence, ai_decision)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
        )
        .bind(now_timestamp())
        .bind(token)
        .bind(signal_type)
        .bind(confidence)
        .bind(ai_decision)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent signals, newest first
    pub async fn recent_signals(&self, limit: i64) -> DbResult<Vec<SignalRecord>> {
        let records = sqlx::query_as::<_, SignalRecord>(
            r#"SELECT id, timestamp, token, signal_type, confidence, ai_decision
               FROM signals
               ORDER BY timestamp DESC, id DESC
               LIMIT ?1"#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Total number of signals
    pub async fn count(&self) -> DbResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM signals")
            .fetch_one(self.pool)
            .await?;

        Ok(row.0)
    }

    /// Average confidence over signals with confidence > 0 (sentinels excluded).
    /// `None` when no such signal exists.
    pub async fn average_confidence(&self) -> DbResult<Option<f64>> {
        let row: (Option<f64>,) =
            sqlx::query_as("SELECT AVG(confidence) FROM signals WHERE confidence > 0")
                .fetch_one(self.pool)
                .await?;

        Ok(row.0)
    }
}
