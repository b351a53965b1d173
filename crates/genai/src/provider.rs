//! Boundary to the external generative-text provider.
//!
//! The provider is an opaque capability `prompt text -> raw text`. Nothing
//! downstream assumes determinism, bounded latency beyond the configured
//! timeout, or schema compliance; extraction and validation do the
//! vetting.

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;

/// An opaque generative-text capability.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate raw text for a prompt. May fail; may return anything.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

/// Chat-completions client for Groq's OpenAI-compatible API.
pub struct GroqClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl GroqClient {
    /// Build a client from the given configuration. The request timeout
    /// is enforced by the underlying HTTP client.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Provider(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl TextProvider for GroqClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Provider("No API key configured".to_string()))?;

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "top_p": 1,
            "stream": false,
        });

        log::debug!("Calling provider model {}", self.config.model);

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::ProviderTimeout(self.config.timeout_secs)
                } else {
                    Error::Provider(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!("provider http {status}: {text}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Provider(format!("malformed completion payload: {e}")))?;

        match payload["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Err(Error::Provider(
                "completion payload carries no message content".to_string(),
            )),
        }
    }
}
