use std::fmt;
use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared DeepSeek HTTP client configuration.
pub struct DeepSeekClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl DeepSeekClient {
    pub fn new(api_key: String) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Builds a client whose requests give up after `timeout`, response body included.
    pub fn with_timeout(api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the completions endpoint URL.
    pub fn completions_url(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

impl fmt::Debug for DeepSeekClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepSeekClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_deepseek_completions_endpoint() {
        let client = DeepSeekClient::new("key".to_string());

        assert_eq!(
            client.completions_url(),
            "https://api.deepseek.com/v1/completions"
        );
        assert_eq!(client.model, "deepseek-chat");
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = DeepSeekClient::new("key".to_string()).base_url("http://localhost:9000/");

        assert_eq!(client.completions_url(), "http://localhost:9000/completions");
    }

    #[test]
    fn should_build_bearer_auth_header() {
        let client = DeepSeekClient::new("secret".to_string());
        assert_eq!(client.auth_header(), "Bearer secret");
    }

    #[test]
    fn should_not_leak_api_key_in_debug_output() {
        let client = DeepSeekClient::new("super-secret".to_string());

        let debug = format!("{:?}", client);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
