use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, instrument};

use super::TextGenerator;
use super::config::GenerationConfig;
use super::error::{GenerationError, GenerationResult};
use super::types::{GenerateContentRequest, GenerationSettings};

/// Gemini `generateContent` implementation of [`TextGenerator`].
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: HttpClient,
    config: GenerationConfig,
}

impl GeminiClient {
    /// Builds a client whose every request is bounded by `config.timeout`.
    pub fn new(config: GenerationConfig) -> GenerationResult<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(GenerationError::MissingApiKey);
        };

        let request = GenerateContentRequest::single_prompt(prompt, self.settings());

        let body: Value = self
            .http
            .post(&self.config.url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        let text = extract_text(&body)?;
        debug!(reply_len = text.len(), "generation complete");
        Ok(text)
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

/// Reads the reply text out of a `generateContent` response.
///
/// `candidates` wins over `error`; a body with neither is [`GenerationError::NoResponse`].
pub fn extract_text(body: &Value) -> GenerationResult<String> {
    if body.get("candidates").is_some() {
        return body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| GenerationError::MalformedResponse {
                reason: "candidates[0].content.parts[0].text is missing".to_string(),
            });
    }

    if let Some(error) = body.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return Err(GenerationError::Provider { message });
    }

    Err(GenerationError::NoResponse)
}
