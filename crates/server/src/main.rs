//! Trading Desk — AI verdict dashboard with simulated trades
//!
//! Usage:
//!   trading-desk serve --port 3002          — Launch web server with UI
//!   trading-desk analyze --token PEPE       — Run one analysis from CLI
//!   trading-desk stats                      — Print signal/trade metrics
//!   trading-desk ping                       — Test the model API connection

mod demo;
mod view;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use engine::{
    AiConfig, AnalysisRequest, AnalysisService, ChatCompletion, DecisionClient, OpenAiClient,
    PositionSizing, SignalOrigin,
};
use persistence::repository::{
    SignalRepository, StatsRepository, TradeRepository, DEFAULT_RECENT_SIGNALS,
    DEFAULT_RECENT_TRADES,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DB_PATH: &str = "data/trading.db";
const PERFORMANCE_DAYS: u32 = 7;

#[derive(Parser)]
#[command(name = "trading-desk")]
#[command(about = "AI verdict dashboard with simulated trades", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3002)]
        port: u16,
    },
    /// Analyze one demo token and record the result
    Analyze {
        /// Demo token (PEPE, SHIB, DOGE, FLOKI)
        #[arg(long, default_value = "PEPE")]
        token: String,
        /// Use the fixed quick-test features (never trades)
        #[arg(long)]
        quick: bool,
        /// Portfolio value in USD
        #[arg(long, default_value_t = Decimal::from(1000))]
        portfolio: Decimal,
        /// Max position as a percentage of the portfolio
        #[arg(long, default_value_t = Decimal::from(5))]
        max_position: Decimal,
    },
    /// Print dashboard metrics and recent signals
    Stats {
        /// Number of recent signals to list
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Send a minimal request to the model API
    Ping,
}

#[derive(Clone)]
struct AppState {
    analysis: Arc<AnalysisService>,
    openai: Arc<OpenAiClient>,
    db: Arc<persistence::Database>,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug,engine=debug,persistence=debug,trading_desk=debug")
    } else {
        EnvFilter::new("info,engine=info,persistence=info,trading_desk=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).compact())
        .with(filter)
        .init();
}

fn db_path() -> String {
    std::env::var("TRADING_DESK_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
}

async fn open_database(path: &str) -> anyhow::Result<persistence::Database> {
    persistence::Database::new(path).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!("Database initialization failed: {}", e)
    })
}

/// Wire the model client, decision client and store together
async fn build_state() -> anyhow::Result<AppState> {
    let config = AiConfig::from_env();
    if config.has_api_key() {
        info!(model = %config.model, "Model API key configured");
    } else {
        warn!("OPENAI_API_KEY missing, analyses will return NO_API_KEY");
    }

    let path = db_path();
    let db = open_database(&path).await?;
    info!("Database initialized: {}", path);

    let openai = Arc::new(OpenAiClient::new(&config)?);
    let decisions = DecisionClient::new(openai.clone());
    let analysis = AnalysisService::new(decisions, db.pool_clone());

    Ok(AppState {
        analysis: Arc::new(analysis),
        openai,
        db: Arc::new(db),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(&host, port).await?;
        }
        Commands::Analyze {
            token,
            quick,
            portfolio,
            max_position,
        } => {
            cmd_analyze(&token, quick, portfolio, max_position).await?;
        }
        Commands::Stats { limit } => {
            cmd_stats(limit).await?;
        }
        Commands::Ping => {
            cmd_ping().await?;
        }
    }

    Ok(())
}

// ============================================================================
// Serve command — Axum web server
// ============================================================================

/// Routes mounted under `/api`
fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api_health))
        .route("/config", get(api_config))
        .route("/analyze", post(api_analyze))
        .route("/analyze/quick", post(api_quick_analysis))
        .route("/signals", get(api_signals))
        .route("/trades", get(api_trades))
        .route("/metrics", get(api_metrics))
        .route("/charts/confidence", get(api_confidence_chart))
        .route("/charts/performance", get(api_performance_chart))
        .route("/ai/test", post(api_test_connection))
        .with_state(state)
}

async fn cmd_serve(host: &str, port: u16) -> anyhow::Result<()> {
    info!("Trading Desk v{} starting...", APP_VERSION);

    let state = build_state().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Determine static files directory
    let exe_path = std::env::current_exe().unwrap_or_default();
    let exe_dir = exe_path.parent().unwrap_or(std::path::Path::new("."));
    let dist_dir = exe_dir.join("dist");
    let static_dir = if dist_dir.exists() {
        dist_dir
    } else {
        std::path::PathBuf::from("dist")
    };

    let app = Router::new()
        .nest("/api", api_router(state))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(cors);

    let addr: std::net::SocketAddr = format!("{}:{}", host, port).parse()?;
    println!("\n=== Trading Desk v{} ===", APP_VERSION);
    println!("AI verdict dashboard");
    println!("Listening on http://{}", addr);
    println!("\nEndpoints:");
    println!("  GET  /api/health              - Health check");
    println!("  GET  /api/config              - Credential status, demo tokens, agents");
    println!("  POST /api/analyze             - Analyze a demo token (may simulate a trade)");
    println!("  POST /api/analyze/quick       - Quick test analysis of PEPE");
    println!("  GET  /api/signals             - Recent signals");
    println!("  GET  /api/trades              - Recent simulated trades");
    println!("  GET  /api/metrics             - Signal/trade counts, avg confidence");
    println!("  GET  /api/charts/confidence   - Confidence per signal");
    println!("  GET  /api/charts/performance  - 7-day illustration (synthetic)");
    println!("  POST /api/ai/test             - Test model API connection");
    println!("\n  Database: {}", db_path());
    println!("\nPress Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Analyze / Stats / Ping commands — CLI mode (no web server)
// ============================================================================

async fn cmd_analyze(
    token: &str,
    quick: bool,
    portfolio: Decimal,
    max_position: Decimal,
) -> anyhow::Result<()> {
    let state = build_state().await?;

    let request = if quick {
        AnalysisRequest {
            features: demo::quick_test_features(),
            origin: SignalOrigin::AiAnalysis,
            sizing: None,
        }
    } else {
        let token = demo::demo_token(token).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown token '{}'. Choose one of: {}",
                token,
                demo::DEMO_TOKENS.join(", ")
            )
        })?;
        let sizing = PositionSizing::new(portfolio, max_position)?;
        let features = demo::random_features(token, &mut rand::thread_rng());
        AnalysisRequest {
            features,
            origin: SignalOrigin::ManualAnalysis,
            sizing: Some(sizing),
        }
    };

    println!("\n=== Trading Desk v{} ===", APP_VERSION);
    println!(
        "Analyzing {} (price ${}, liquidity ${}, volume ${}, holders {})...",
        request.features.name,
        request.features.price,
        request.features.liquidity,
        request.features.volume,
        request.features.holders
    );

    let outcome = state.analysis.analyze(request).await?;
    let result = &outcome.result;

    println!("\n  Decision:   {}", result.decision);
    println!("  Confidence: {}%", result.confidence);
    println!("  Reasoning:  {}", result.reasoning);
    println!("  Signal #{} recorded", outcome.signal_id);
    if let Some(trade) = &outcome.trade {
        println!("  Simulated trade #{} executed: BUY ${:.2}", trade.trade_id, trade.amount);
    }
    if let Some(message) = &outcome.trade_error {
        println!("  Warning: {}", message);
    }
    println!();

    Ok(())
}

async fn cmd_stats(limit: i64) -> anyhow::Result<()> {
    let path = db_path();
    let db = open_database(&path).await?;

    let stats = StatsRepository::new(db.pool()).dashboard_stats().await?;
    let signals = SignalRepository::new(db.pool()).recent_signals(limit).await?;

    println!("\n=== Trading Desk v{} ===", APP_VERSION);
    println!("Database: {}", path);
    println!("\n  Signals total:  {}", stats.total_signals);
    println!("  Trades total:   {}", stats.total_trades);
    match stats.avg_confidence {
        Some(avg) => println!("  Avg confidence: {}", view::format_confidence(avg)),
        None => println!("  Avg confidence: -"),
    }

    if signals.is_empty() {
        println!("\n  No signals yet. Run `trading-desk analyze` first.");
    } else {
        println!("\n  {:<10} {:<8} {:<16} {:>8}  {}", "TIME", "TOKEN", "TYPE", "CONF", "DECISION");
        for record in &signals {
            let row = view::SignalView::from(record);
            println!(
                "  {:<10} {:<8} {:<16} {:>8}  {}",
                row.time,
                row.token,
                row.signal_type,
                row.confidence,
                row.decision.unwrap_or_else(|| "?".to_string())
            );
        }
    }
    println!();

    Ok(())
}

async fn cmd_ping() -> anyhow::Result<()> {
    let config = AiConfig::from_env();
    if !config.has_api_key() {
        anyhow::bail!("OPENAI_API_KEY missing");
    }
    let client = OpenAiClient::new(&config)?;
    client.test_connection().await?;
    println!("Model API connected ({})", config.model);
    Ok(())
}

// ============================================================================
// API Handlers — Status
// ============================================================================

/// GET /api/health
async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "trading-desk",
        "version": APP_VERSION,
    }))
}

/// GET /api/config — credential status, demo tokens, sizing defaults, agent board
async fn api_config(State(state): State<AppState>) -> Json<serde_json::Value> {
    let decisions = state.analysis.decisions();
    let configured = decisions.is_configured();
    let model = decisions.model();
    let defaults = PositionSizing::default();

    Json(serde_json::json!({
        "api_key_configured": configured,
        "model": model,
        "demo_tokens": demo::DEMO_TOKENS,
        "sizing": {
            "portfolio_value": defaults.portfolio_value(),
            "max_position_pct": defaults.max_position_pct(),
            "min_portfolio_value": engine::trading::MIN_PORTFOLIO_VALUE,
            "min_position_pct": engine::trading::MIN_POSITION_PCT,
            "max_position_pct_limit": engine::trading::MAX_POSITION_PCT,
        },
        "trade_confidence_threshold": engine::TRADE_CONFIDENCE_THRESHOLD,
        "agents": [
            {
                "name": "Scout",
                "status": if configured { "operational" } else { "offline" },
                "model": model,
            },
            { "name": "Analyst", "status": "in development", "model": null },
            { "name": "Risk Manager", "status": "in development", "model": null },
        ],
    }))
}

/// POST /api/ai/test — minimal round trip to the model API
async fn api_test_connection(State(state): State<AppState>) -> Json<serde_json::Value> {
    if !state.openai.is_configured() {
        return Json(serde_json::json!({
            "success": false,
            "error": "OPENAI_API_KEY missing",
        }));
    }

    match state.openai.test_connection().await {
        Ok(()) => {
            info!("Model API connection test passed");
            Json(serde_json::json!({
                "success": true,
                "model": state.openai.model(),
            }))
        }
        Err(e) => {
            warn!("Model API connection test failed: {:#}", e);
            Json(serde_json::json!({
                "success": false,
                "error": format!("{:#}", e),
            }))
        }
    }
}

// ============================================================================
// API Handlers — Analysis
// ============================================================================

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    token: String,
    portfolio_value: Option<Decimal>,
    max_position_pct: Option<Decimal>,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "success": false, "error": message })),
    )
}

async fn run_analysis(state: &AppState, request: AnalysisRequest) -> Json<serde_json::Value> {
    match state.analysis.analyze(request).await {
        Ok(outcome) => Json(serde_json::json!({
            "success": true,
            "outcome": outcome,
        })),
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            Json(serde_json::json!({
                "success": false,
                "error": format!("Failed to record analysis: {}", e),
            }))
        }
    }
}

/// POST /api/analyze — analyze a selected demo token with random features
async fn api_analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(body) = body.map_err(|e| bad_request(e.body_text()))?;
    let token = demo::demo_token(&body.token).ok_or_else(|| {
        bad_request(format!(
            "Unknown token '{}'. Choose one of: {}",
            body.token,
            demo::DEMO_TOKENS.join(", ")
        ))
    })?;

    let defaults = PositionSizing::default();
    let sizing = PositionSizing::new(
        body.portfolio_value.unwrap_or(defaults.portfolio_value()),
        body.max_position_pct.unwrap_or(defaults.max_position_pct()),
    )
    .map_err(|e| bad_request(e.to_string()))?;

    let features = {
        let mut rng = rand::thread_rng();
        demo::random_features(token, &mut rng)
    };

    info!(token, "Starting manual analysis");
    let request = AnalysisRequest {
        features,
        origin: SignalOrigin::ManualAnalysis,
        sizing: Some(sizing),
    };
    Ok(run_analysis(&state, request).await)
}

/// POST /api/analyze/quick — fixed PEPE features, never trades
async fn api_quick_analysis(State(state): State<AppState>) -> Json<serde_json::Value> {
    info!("Starting quick test analysis");
    let request = AnalysisRequest {
        features: demo::quick_test_features(),
        origin: SignalOrigin::AiAnalysis,
        sizing: None,
    };
    run_analysis(&state, request).await
}

// ============================================================================
// API Handlers — Signals, Trades, Metrics
// ============================================================================

fn limit_param(params: &HashMap<String, String>, default: i64) -> i64 {
    params
        .get("limit")
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|l| *l > 0)
        .unwrap_or(default)
}

/// GET /api/signals — recent signals, formatted for display
async fn api_signals(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let limit = limit_param(&params, DEFAULT_RECENT_SIGNALS);

    let repo = SignalRepository::new(state.db.pool());
    match repo.recent_signals(limit).await {
        Ok(records) => {
            let rows: Vec<view::SignalView> = records.iter().map(view::SignalView::from).collect();
            Json(serde_json::json!({
                "success": true,
                "data": rows,
                "total": rows.len(),
                "limit": limit,
            }))
        }
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to query signals: {}", e),
            "data": [],
            "total": 0,
        })),
    }
}

/// GET /api/trades — recent simulated trades
async fn api_trades(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let limit = limit_param(&params, DEFAULT_RECENT_TRADES);

    let repo = TradeRepository::new(state.db.pool());
    match repo.recent_trades(limit).await {
        Ok(records) => Json(serde_json::json!({
            "success": true,
            "data": records,
            "total": records.len(),
            "limit": limit,
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to query trades: {}", e),
            "data": [],
            "total": 0,
        })),
    }
}

/// GET /api/metrics — signal count, trade count, average confidence
async fn api_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let repo = StatsRepository::new(state.db.pool());
    match repo.dashboard_stats().await {
        Ok(stats) => Json(serde_json::json!({
            "success": true,
            "stats": stats,
            "avg_confidence_display": stats.avg_confidence.map(view::format_confidence),
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to get metrics: {}", e),
        })),
    }
}

// ============================================================================
// API Handlers — Charts
// ============================================================================

/// GET /api/charts/confidence — confidence per recent signal (newest first)
async fn api_confidence_chart(State(state): State<AppState>) -> Json<serde_json::Value> {
    let repo = SignalRepository::new(state.db.pool());
    match repo.recent_signals(DEFAULT_RECENT_SIGNALS).await {
        Ok(records) => Json(serde_json::json!({
            "success": true,
            "series": view::confidence_series(&records),
        })),
        Err(e) => Json(serde_json::json!({
            "success": false,
            "error": format!("Failed to query signals: {}", e),
            "series": [],
        })),
    }
}

/// GET /api/charts/performance — synthetic 7-day walk, not derived from trades
async fn api_performance_chart() -> Json<serde_json::Value> {
    let today = Utc::now().date_naive();
    let points = demo::synthetic_performance(PERFORMANCE_DAYS, today, &mut rand::thread_rng());
    Json(serde_json::json!({
        "success": true,
        "synthetic": true,
        "points": points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    /// State backed by an in-memory store and a client with no API key
    async fn test_state() -> AppState {
        let db = persistence::Database::in_memory().await.unwrap();
        let openai = Arc::new(OpenAiClient::new(&AiConfig::default()).unwrap());
        let analysis = AnalysisService::new(DecisionClient::new(openai.clone()), db.pool_clone());
        AppState {
            analysis: Arc::new(analysis),
            openai,
            db: Arc::new(db),
        }
    }

    async fn post_analyze(state: &AppState, body: &str) -> (StatusCode, serde_json::Value) {
        let response = api_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn signal_count(state: &AppState) -> i64 {
        SignalRepository::new(state.db.pool()).count().await.unwrap()
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_token() {
        let state = test_state().await;
        let (status, json) = post_analyze(&state, r#"{"token": "BONK"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Unknown token 'BONK'"));
        assert_eq!(signal_count(&state).await, 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_unrepresentable_position() {
        let state = test_state().await;
        let (status, json) = post_analyze(
            &state,
            r#"{"token": "PEPE", "portfolio_value": 1e28, "max_position_pct": 10}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("too large"));
        assert_eq!(signal_count(&state).await, 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_out_of_range_sizing() {
        let state = test_state().await;
        let (status, json) =
            post_analyze(&state, r#"{"token": "PEPE", "max_position_pct": 25}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(signal_count(&state).await, 0);
    }

    #[tokio::test]
    async fn test_analyze_malformed_body_is_json_error() {
        let state = test_state().await;

        let (status, json) = post_analyze(&state, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].is_string());

        let (status, json) = post_analyze(&state, r#"{"portfolio_value": 1000}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);

        assert_eq!(signal_count(&state).await, 0);
    }

    #[tokio::test]
    async fn test_analyze_without_key_records_sentinel() {
        let state = test_state().await;
        let (status, json) = post_analyze(&state, r#"{"token": "doge"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["outcome"]["token"], "DOGE");
        assert_eq!(json["outcome"]["result"]["decision"], "NO_API_KEY");
        assert!(json["outcome"]["trade"].is_null());
        assert_eq!(signal_count(&state).await, 1);
    }

    #[tokio::test]
    async fn test_config_reports_missing_key() {
        let state = test_state().await;
        let response = api_router(state)
            .oneshot(Request::builder().uri("/config").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["api_key_configured"], false);
        assert_eq!(json["agents"][0]["status"], "offline");
    }

    #[test]
    fn test_limit_param() {
        let mut params = HashMap::new();
        assert_eq!(limit_param(&params, 20), 20);
        params.insert("limit".to_string(), "5".to_string());
        assert_eq!(limit_param(&params, 20), 5);
        params.insert("limit".to_string(), "-3".to_string());
        assert_eq!(limit_param(&params, 20), 20);
        params.insert("limit".to_string(), "lots".to_string());
        assert_eq!(limit_param(&params, 10), 10);
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "trading-desk",
            "analyze",
            "--token",
            "doge",
            "--portfolio",
            "2500",
            "--max-position",
            "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                token,
                quick,
                portfolio,
                max_position,
            } => {
                assert_eq!(token, "doge");
                assert!(!quick);
                assert_eq!(portfolio, dec!(2500));
                assert_eq!(max_position, dec!(10));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["trading-desk", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 3002);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_analyze_body_accepts_numbers() {
        let body: AnalyzeBody = serde_json::from_str(
            r#"{"token": "SHIB", "portfolio_value": 1000, "max_position_pct": 5}"#,
        )
        .unwrap();
        assert_eq!(body.portfolio_value, Some(dec!(1000)));
        assert_eq!(body.max_position_pct, Some(dec!(5)));

        let body: AnalyzeBody = serde_json::from_str(r#"{"token": "SHIB"}"#).unwrap();
        assert!(body.portfolio_value.is_none());
    }
}
