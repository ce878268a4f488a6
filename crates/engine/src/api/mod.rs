//! External API clients

pub mod openai;

pub use openai::OpenAiClient;

use anyhow::Result;
use async_trait::async_trait;

/// A single chat-completion request: optional system instruction plus one user message
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system: Option<String>,
    pub user: String,
    pub temperature: Option<f64>,
    pub max_tokens: u32,
}

/// Transport seam for chat-completion backends
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Whether a credential is available. Callers must not call
    /// [`ChatCompletion::complete`] when this is false.
    fn is_configured(&self) -> bool;

    /// Model identifier, for display
    fn model(&self) -> &str;

    /// Send the request and return the reply text
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}
