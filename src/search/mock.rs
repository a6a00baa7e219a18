use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::WebSearch;
use super::error::{SearchError, SearchResult};
use super::types::WebContext;

#[derive(Clone)]
enum MockSearchOutcome {
    Context(WebContext),
    Failure(String),
}

/// In-memory [`WebSearch`] that returns a fixed outcome and records every query.
#[derive(Clone)]
pub struct MockWebSearch {
    outcome: MockSearchOutcome,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockWebSearch {
    /// Returns `snippets` for every query.
    pub fn with_snippets<I, S>(snippets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_context(WebContext::new(snippets.into_iter().map(Into::into).collect()))
    }

    pub fn with_context(context: WebContext) -> Self {
        Self {
            outcome: MockSearchOutcome::Context(context),
            queries: Arc::default(),
        }
    }

    /// Returns no snippets.
    pub fn empty() -> Self {
        Self::with_context(WebContext::default())
    }

    /// Fails every query with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: MockSearchOutcome::Failure(reason.into()),
            queries: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.queries.read().map(|q| q.len()).unwrap_or_default()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.read().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl WebSearch for MockWebSearch {
    async fn search(&self, query: &str) -> SearchResult<WebContext> {
        if let Ok(mut queries) = self.queries.write() {
            queries.push(query.to_string());
        }

        match &self.outcome {
            MockSearchOutcome::Context(context) => Ok(context.clone()),
            MockSearchOutcome::Failure(reason) => Err(SearchError::InvalidResponse {
                reason: reason.clone(),
            }),
        }
    }
}
