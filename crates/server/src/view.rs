//! Display formatting for dashboard tables and charts

use chrono::DateTime;
use persistence::repository::SignalRecord;
use serde::Serialize;

/// A signal row as shown in the recent-signals table
#[derive(Debug, Clone, Serialize)]
pub struct SignalView {
    pub id: i64,
    pub time: String,
    pub token: String,
    pub signal_type: String,
    pub confidence: String,
    /// Verdict kind pulled from the stored JSON, when readable
    pub decision: Option<String>,
}

impl From<&SignalRecord> for SignalView {
    fn from(record: &SignalRecord) -> Self {
        Self {
            id: record.id,
            time: format_time(&record.timestamp),
            token: record.token.clone(),
            signal_type: record.signal_type.clone(),
            confidence: format_confidence(record.confidence),
            decision: stored_decision(&record.ai_decision),
        }
    }
}

/// One point of the confidence-over-signal-index chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidencePoint {
    pub index: usize,
    pub confidence_pct: f64,
}

/// 0.0–1.0 confidence as a one-decimal percentage
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Truncate a stored RFC 3339 timestamp to `HH:MM:SS`
pub fn format_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn stored_decision(ai_decision: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(ai_decision)
        .ok()?
        .get("decision")?
        .as_str()
        .map(str::to_string)
}

/// Chart series in the order the signals were fetched (newest first)
pub fn confidence_series(signals: &[SignalRecord]) -> Vec<ConfidencePoint> {
    signals
        .iter()
        .enumerate()
        .map(|(index, s)| ConfidencePoint {
            index,
            confidence_pct: s.confidence * 100.0,
        })
        .collect()
}
