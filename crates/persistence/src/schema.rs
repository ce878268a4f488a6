//! Database schema definitions

/// SQL to create all tables. Both tables are append-only logs.
pub const CREATE_TABLES: &str = r#"
-- One row per decision request
CREATE TABLE IF NOT EXISTS signals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    token TEXT NOT NULL,
    signal_type TEXT NOT NULL,
    confidence REAL NOT NULL DEFAULT 0,
    ai_decision TEXT NOT NULL
);

-- One row per simulated execution (high-confidence BUY only)
CREATE TABLE IF NOT EXISTS trades (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    token TEXT NOT NULL,
    action TEXT NOT NULL,
    amount REAL NOT NULL,
    profit REAL NOT NULL DEFAULT 0,
    status TEXT NOT NULL
);

-- ========== INDEXES ==========

CREATE INDEX IF NOT EXISTS idx_signals_timestamp ON signals(timestamp DESC);
CREATE INDEX IF NOT EXISTS idx_trades_timestamp ON trades(timestamp DESC)
"#;
