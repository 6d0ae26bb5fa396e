use std::time::Duration;

use deepseek::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

use super::env::{parse_or, process_env, required};

/// Configuration for DeepSeek API access.
///
/// Environment variables:
/// - DEEPSEEK_API_KEY: bearer secret (required)
/// - DEEPSEEK_BASE_URL: API base (default: "https://api.deepseek.com/v1")
/// - DEEPSEEK_MODEL: model name sent upstream (default: "deepseek-chat")
/// - DEEPSEEK_TIMEOUT_SECS: upstream request timeout (default: 30)
#[derive(Clone)]
pub struct DeepSeekConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl DeepSeekConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(lookup, "DEEPSEEK_API_KEY")?;
        let base_url = lookup("DEEPSEEK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = lookup("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout_secs = parse_or(lookup, "DEEPSEEK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl std::fmt::Debug for DeepSeekConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepSeekConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
