use serde::{Deserialize, Serialize};

use super::error::AnswerError;
use crate::generation::{GenerationResult, render_generation};
use crate::search::{SearchResult, WebContext};

/// A query that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, AnswerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnswerError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Typed outcome of [`search_and_answer`](super::search_and_answer).
#[derive(Debug)]
pub struct Answer {
    pub query: String,
    pub web_context: SearchResult<WebContext>,
    /// The context exactly as it was embedded in the prompt.
    pub rendered_context: String,
    pub ai_answer: GenerationResult<String>,
}

impl Answer {
    pub fn is_degraded(&self) -> bool {
        self.web_context.is_err() || self.ai_answer.is_err()
    }

    /// Renders failures into their user-facing text.
    pub fn into_result(self) -> AnswerResult {
        AnswerResult {
            ai_answer: render_generation(&self.ai_answer),
            web_context: self.rendered_context,
            query: self.query,
        }
    }
}

/// Wire record returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub ai_answer: String,
    pub web_context: String,
    pub query: String,
}
