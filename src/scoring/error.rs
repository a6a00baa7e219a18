use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Missing required fields: query, ai_answer, expected_answer")]
    MissingFields,
}

/// Why a model reply could not be decoded into a [`ScoreRecord`](super::ScoreRecord).
#[derive(Debug, Error)]
pub enum ScoreParseError {
    #[error("score reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("score reply is JSON but not an object (got {kind})")]
    NotAnObject { kind: &'static str },

    #[error("score reply has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
}
