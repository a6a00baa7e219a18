//! Synapse core library (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Operations
//! - [`search_and_answer`] - web search, prompt assembly, generation
//! - [`score_answer`] - rubric prompt, generation, tolerant decoding with fallback
//!
//! ## Collaborators
//! - [`WebSearch`] / [`DuckDuckGoClient`] - instant-answer search
//! - [`TextGenerator`] / [`GeminiClient`] - `generateContent` calls
//!
//! Both take their config struct at construction ([`SearchConfig`], [`GenerationConfig`]),
//! usually projected from the process-wide [`Config`].
//!
//! ## Errors
//! Failures are typed internally. Their `Display` text is the exact string the HTTP
//! endpoints return in place of content, so rendering happens only at the boundary.
//!
//! ## Test/Mock Support
//! [`MockWebSearch`] and [`MockGenerator`] are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod answer;
pub mod config;
pub mod constants;
pub mod generation;
pub mod scoring;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use answer::{Answer, AnswerError, AnswerResult, SearchQuery, answer_prompt, search_and_answer};
pub use config::{Config, ConfigError};
pub use constants::NO_WEB_RESULTS;
pub use generation::{
    GeminiClient, GenerationConfig, GenerationError, GenerationResult, TextGenerator,
    render_generation,
};
#[cfg(any(test, feature = "mock"))]
pub use generation::{MockFailure, MockGenerator};
pub use scoring::{
    Dimension, FallbackReason, ScoreAnomaly, ScoreOutcome, ScoreParseError, ScoreRecord,
    ScoreRequest, ScoreSource, ScoringError, Verdict, parse_score_reply, score_answer,
    scoring_prompt,
};
#[cfg(any(test, feature = "mock"))]
pub use search::MockWebSearch;
pub use search::{
    DuckDuckGoClient, SearchConfig, SearchError, SearchResult, WebContext, WebSearch,
    render_context,
};
