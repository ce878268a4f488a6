//! Decision client — turns a token's features into a BUY/SELL/HOLD verdict
//!
//! The verdict comes entirely from the hosted model. Failures never escape:
//! a missing credential maps to `NO_API_KEY`, and any transport or reply
//! problem maps to `ERROR` with confidence 0.

use crate::api::{ChatCompletion, ChatRequest};
use crate::types::TokenFeatures;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const SYSTEM_PROMPT: &str =
    "You are an expert crypto trader. Always answer with valid JSON.";
pub const TEMPERATURE: f64 = 0.3;
pub const MAX_REPLY_TOKENS: u32 = 200;
/// Upper bound on the reasoning text of an `ERROR` verdict, in characters
pub const MAX_ERROR_REASONING: usize = 100;

/// Verdict kinds, serialized as `BUY`, `SELL`, `HOLD`, `ERROR`, `NO_API_KEY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionKind {
    Buy,
    Sell,
    Hold,
    Error,
    NoApiKey,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Buy => "BUY",
            DecisionKind::Sell => "SELL",
            DecisionKind::Hold => "HOLD",
            DecisionKind::Error => "ERROR",
            DecisionKind::NoApiKey => "NO_API_KEY",
        }
    }

    /// `ERROR` and `NO_API_KEY` are sentinels, not model output
    pub fn is_sentinel(&self) -> bool {
        matches!(self, DecisionKind::Error | DecisionKind::NoApiKey)
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record returned for every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDecision {
    pub decision: DecisionKind,
    /// 0–100
    pub confidence: f64,
    pub reasoning: String,
}

impl TradeDecision {
    pub fn no_api_key() -> Self {
        Self {
            decision: DecisionKind::NoApiKey,
            confidence: 0.0,
            reasoning: "OPENAI_API_KEY is missing from the environment".to_string(),
        }
    }

    pub fn error(err: &DecisionError) -> Self {
        Self {
            decision: DecisionKind::Error,
            confidence: 0.0,
            reasoning: truncate_chars(&format!("AI error: {err}"), MAX_ERROR_REASONING),
        }
    }
}

#[derive(Error, Debug)]
pub enum DecisionError {
    #[error("{0}")]
    Transport(String),

    #[error("invalid verdict JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("confidence {0} outside 0..=100")]
    ConfidenceOutOfRange(f64),
}

/// Shape the model must answer with. Anything else is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelVerdict {
    decision: ModelDecision,
    confidence: f64,
    reasoning: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum ModelDecision {
    Buy,
    Sell,
    Hold,
}

impl From<ModelDecision> for DecisionKind {
    fn from(d: ModelDecision) -> Self {
        match d {
            ModelDecision::Buy => DecisionKind::Buy,
            ModelDecision::Sell => DecisionKind::Sell,
            ModelDecision::Hold => DecisionKind::Hold,
        }
    }
}

/// Strictly parse and validate a model reply
pub fn parse_verdict(reply: &str) -> Result<TradeDecision, DecisionError> {
    let verdict: ModelVerdict = serde_json::from_str(reply)?;
    if !(0.0..=100.0).contains(&verdict.confidence) {
        return Err(DecisionError::ConfidenceOutOfRange(verdict.confidence));
    }

    Ok(TradeDecision {
        decision: verdict.decision.into(),
        confidence: verdict.confidence,
        reasoning: verdict.reasoning,
    })
}

/// Build the user instruction for a token
pub fn build_prompt(features: &TokenFeatures) -> String {
    format!(
        "You are an expert crypto trader. Analyze this token:\n\
         \n\
         Token: {name}\n\
         Price: ${price}\n\
         Liquidity: ${liquidity}\n\
         24h volume: ${volume}\n\
         Holders: {holders}\n\
         \n\
         Give your verdict as JSON with exactly these keys:\n\
         {{\n\
         \x20   \"decision\": \"BUY\" or \"SELL\" or \"HOLD\",\n\
         \x20   \"confidence\": score from 0 to 100,\n\
         \x20   \"reasoning\": \"short explanation\"\n\
         }}",
        name = features.name,
        price = features.price,
        liquidity = format_thousands(features.liquidity),
        volume = format_thousands(features.volume),
        holders = features.holders,
    )
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Stateless decision client over a chat-completion backend
#[derive(Clone)]
pub struct DecisionClient {
    backend: Arc<dyn ChatCompletion>,
}

impl DecisionClient {
    pub fn new(backend: Arc<dyn ChatCompletion>) -> Self {
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_configured()
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Ask the model for a verdict. Never fails; see module docs.
    pub async fn analyze(&self, features: &TokenFeatures) -> TradeDecision {
        if !self.backend.is_configured() {
            warn!(token = %features.name, "No API key configured, skipping model call");
            return TradeDecision::no_api_key();
        }

        match self.request_verdict(features).await {
            Ok(decision) => {
                info!(
                    token = %features.name,
                    decision = %decision.decision,
                    confidence = decision.confidence,
                    "Model verdict received"
                );
                decision
            }
            Err(e) => {
                warn!(token = %features.name, error = %e, "Model verdict failed");
                TradeDecision::error(&e)
            }
        }
    }

    async fn request_verdict(&self, features: &TokenFeatures) -> Result<TradeDecision, DecisionError> {
        let request = ChatRequest {
            system: Some(SYSTEM_PROMPT.to_string()),
            user: build_prompt(features),
            temperature: Some(TEMPERATURE),
            max_tokens: MAX_REPLY_TOKENS,
        };

        let reply = self
            .backend
            .complete(&request)
            .await
            .map_err(|e| DecisionError::Transport(format!("{e:#}")))?;

        parse_verdict(&reply)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted backend: answers every call with `reply`, records requests
    pub(crate) struct FakeBackend {
        configured: bool,
        reply: Result<String, String>,
        pub(crate) requests: Mutex<Vec<ChatRequest>>,
    }

    impl FakeBackend {
        pub(crate) fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                configured: true,
                reply: Ok(reply.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                configured: true,
                reply: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn unconfigured() -> Arc<Self> {
            Arc::new(Self {
                configured: false,
                reply: Ok(String::new()),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeBackend {
        fn is_configured(&self) -> bool {
            self.configured
        }

        fn model(&self) -> &str {
            "fake-model"
        }

        async fn complete(&self, request: &ChatRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(anyhow::anyhow!(msg.clone())),
            }
        }
    }

    pub(crate) fn pepe() -> TokenFeatures {
        TokenFeatures {
            name: "PEPE".to_string(),
            price: 0.00001,
            liquidity: 125_000,
            volume: 250_000,
            holders: 1200,
        }
    }

    #[tokio::test]
    async fn test_no_api_key_skips_network() {
        let backend = FakeBackend::unconfigured();
        let client = DecisionClient::new(backend.clone());

        let decision = client.analyze(&pepe()).await;
        assert_eq!(decision.decision, DecisionKind::NoApiKey);
        assert_eq!(decision.confidence, 0.0);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_reply_is_returned() {
        let backend = FakeBackend::replying(
            r#"{"decision": "BUY", "confidence": 85, "reasoning": "Strong volume"}"#,
        );
        let client = DecisionClient::new(backend.clone());

        let decision = client.analyze(&pepe()).await;
        assert_eq!(
            decision,
            TradeDecision {
                decision: DecisionKind::Buy,
                confidence: 85.0,
                reasoning: "Strong volume".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_request_shape() {
        let backend = FakeBackend::replying(
            r#"{"decision": "HOLD", "confidence": 40, "reasoning": "Flat"}"#,
        );
        let client = DecisionClient::new(backend.clone());
        client.analyze(&pepe()).await;

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.temperature, Some(0.3));
        assert_eq!(req.max_tokens, 200);
        assert_eq!(req.system.as_deref(), Some(SYSTEM_PROMPT));
        assert!(req.user.contains("Token: PEPE"));
        assert!(req.user.contains("Liquidity: $125,000"));
        assert!(req.user.contains("24h volume: $250,000"));
        assert!(req.user.contains("Holders: 1200"));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_error() {
        let backend = FakeBackend::replying("Sure! Here is my analysis: BUY it now, definitely, no doubt about it whatsoever, trust me on this one.");
        let client = DecisionClient::new(backend);

        let decision = client.analyze(&pepe()).await;
        assert_eq!(decision.decision, DecisionKind::Error);
        assert_eq!(decision.confidence, 0.0);
        assert!(decision.reasoning.chars().count() <= MAX_ERROR_REASONING);
        assert!(decision.reasoning.starts_with("AI error:"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_truncated_error() {
        let long = "connection reset ".repeat(20);
        let client = DecisionClient::new(FakeBackend::failing(&long));

        let decision = client.analyze(&pepe()).await;
        assert_eq!(decision.decision, DecisionKind::Error);
        assert_eq!(decision.confidence, 0.0);
        assert_eq!(decision.reasoning.chars().count(), MAX_ERROR_REASONING);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        // Unknown decision
        assert!(parse_verdict(r#"{"decision":"MOON","confidence":50,"reasoning":"x"}"#).is_err());
        // Sentinels are not valid model output
        assert!(parse_verdict(r#"{"decision":"ERROR","confidence":0,"reasoning":"x"}"#).is_err());
        // Out of range
        assert!(matches!(
            parse_verdict(r#"{"decision":"BUY","confidence":140,"reasoning":"x"}"#),
            Err(DecisionError::ConfidenceOutOfRange(_))
        ));
        assert!(parse_verdict(r#"{"decision":"BUY","confidence":-1,"reasoning":"x"}"#).is_err());
        // Extra key
        assert!(parse_verdict(
            r#"{"decision":"BUY","confidence":50,"reasoning":"x","target":2}"#
        )
        .is_err());
        // Missing key
        assert!(parse_verdict(r#"{"decision":"BUY","confidence":50}"#).is_err());
        // Confidence as string
        assert!(parse_verdict(r#"{"decision":"BUY","confidence":"50","reasoning":"x"}"#).is_err());
    }

    #[test]
    fn test_parse_accepts_bounds_and_floats() {
        let d = parse_verdict(r#"{"decision":"SELL","confidence":0,"reasoning":"dump"}"#).unwrap();
        assert_eq!(d.decision, DecisionKind::Sell);
        let d = parse_verdict(r#"{"decision":"HOLD","confidence":100,"reasoning":""}"#).unwrap();
        assert_eq!(d.confidence, 100.0);
        let d = parse_verdict(r#"{"decision":"BUY","confidence":72.5,"reasoning":"ok"}"#).unwrap();
        assert_eq!(d.confidence, 72.5);
    }

    #[test]
    fn test_decision_serializes_upper_case() {
        let json = serde_json::to_string(&TradeDecision::no_api_key()).unwrap();
        assert!(json.contains(r#""decision":"NO_API_KEY""#));
        assert_eq!(
            serde_json::to_value(DecisionKind::Buy).unwrap(),
            serde_json::json!("BUY")
        );
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(125_000), "125,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
