//! Web-search collaborator.
//!
//! One instant-answer `GET` per query. The result is a [`WebContext`]; failures are typed
//! [`SearchError`]s that callers render into the prompt instead of aborting the request.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;


use async_trait::async_trait;

pub use client::{DuckDuckGoClient, web_context_from_response};
pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockWebSearch;
pub use types::{WebContext, render_context};

#[async_trait]
/// Source of web snippets for a query.
pub trait WebSearch: Send + Sync {
    /// Performs a single search. Implementations must bound the call with a timeout.
    async fn search(&self, query: &str) -> SearchResult<WebContext>;
}
