//! LLM-invocation collaborator.
//!
//! A single `generateContent` call per prompt. Every failure mode (missing key, provider
//! error, empty reply, transport) is a [`GenerationError`] whose `Display` text is the
//! user-facing string the service has always returned in place of an answer.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


use async_trait::async_trait;

pub use client::{GeminiClient, extract_text};
pub use config::GenerationConfig;
pub use error::{GenerationError, GenerationResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockFailure, MockGenerator};
pub use types::{Content, GenerateContentRequest, GenerationSettings, Part};

#[async_trait]
/// Text generation backend shared by answering and scoring.
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for `prompt`. At most one outbound call.
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;

    /// Whether credentials are present (no network access).
    fn is_configured(&self) -> bool;
}

/// Renders a generation outcome into answer text.
pub fn render_generation(result: &GenerationResult<String>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => e.to_string(),
    }
}
