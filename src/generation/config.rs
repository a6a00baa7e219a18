use std::time::Duration;

use crate::constants::{
    DEFAULT_GEMINI_URL, DEFAULT_GENERATION_TIMEOUT_SECS, GENERATION_MAX_OUTPUT_TOKENS,
    GENERATION_TEMPERATURE,
};

#[derive(Clone)]
pub struct GenerationConfig {
    pub url: String,

    /// `None` short-circuits every call with setup instructions.
    pub api_key: Option<String>,

    pub timeout: Duration,

    pub temperature: f32,

    pub max_output_tokens: u32,
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GEMINI_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
            temperature: GENERATION_TEMPERATURE,
            max_output_tokens: GENERATION_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the key; blank keys count as unset.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = Some(key.trim().to_string()).filter(|k| !k.is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
