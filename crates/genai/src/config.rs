//! Provider configuration.

/// Settings for the chat-completions provider call.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Bearer token for the provider API.
    pub api_key: Option<String>,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: u32,
    /// Upper bound on a single provider call, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 4096,
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    /// Read overrides from the environment: `GROQ_API_KEY`, `DECK_MODEL`,
    /// `DECK_ENDPOINT`, `DECK_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("DECK_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("DECK_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(secs) = std::env::var("DECK_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }
}
