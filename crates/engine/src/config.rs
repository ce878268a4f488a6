//! Model API configuration, read from the environment

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the chat-completion client
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `None` when no credential is configured
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AiConfig {
    /// Read `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL` and
    /// `OPENAI_TIMEOUT_SECS`. Blank values fall back to defaults; a blank key
    /// counts as missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: non_blank("OPENAI_API_KEY"),
            model: non_blank("OPENAI_MODEL").unwrap_or(defaults.model),
            base_url: non_blank("OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: non_blank("OPENAI_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
