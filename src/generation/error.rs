use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// No key configured; no request was attempted.
    #[error(
        "⚠️ GEMINI_API_KEY is not set.\n\nTo fix: set the GEMINI_API_KEY environment variable for the server process and restart it."
    )]
    MissingApiKey,

    /// The provider answered with an `error` object.
    #[error("Gemini API Error: {message}")]
    Provider { message: String },

    /// The provider answered with neither `candidates` nor `error`.
    #[error("No response from Gemini.")]
    NoResponse,

    /// `candidates` was present but did not carry text where expected.
    #[error("Request failed: {reason}")]
    MalformedResponse { reason: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
