use thiserror::Error;

/// Search failures. `Display` is the diagnostic that replaces the web context.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Web search error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Web search error: {reason}")]
    InvalidResponse { reason: String },
}

pub type SearchResult<T> = Result<T, SearchError>;
