//! Cross-cutting, shared constants.
//!
//! Wire literals that callers (and the bundled page) match on live here so the
//! collaborators, the scorer and the gateway cannot drift apart.

/// Instant-answer search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.duckduckgo.com/";

/// Generative-content endpoint for the default model.
pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

pub const GENERATION_TEMPERATURE: f32 = 0.7;
pub const GENERATION_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Only the first `MAX_RELATED_TOPICS` entries of `RelatedTopics` are considered.
pub const MAX_RELATED_TOPICS: usize = 5;

/// Rendered web context when the search returned nothing usable.
pub const NO_WEB_RESULTS: &str = "No web results found.";

/// Environment variable holding the model API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Upper bound of each rubric dimension.
pub const MAX_DIMENSION_SCORE: i64 = 25;
/// Upper bound of the total score.
pub const MAX_TOTAL_SCORE: i64 = 100;
