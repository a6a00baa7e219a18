use serde::{Deserialize, Serialize};

use super::error::SearchResult;
use crate::constants::NO_WEB_RESULTS;

/// Ordered snippets returned by a search: abstract first, then related topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebContext {
    pub snippets: Vec<String>,
}

impl WebContext {
    pub fn new(snippets: Vec<String>) -> Self {
        Self { snippets }
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Newline-joined snippets, or [`NO_WEB_RESULTS`] when there are none.
    pub fn render(&self) -> String {
        if self.snippets.is_empty() {
            NO_WEB_RESULTS.to_string()
        } else {
            self.snippets.join("\n")
        }
    }
}

/// Renders a search outcome into the text that is both embedded in the prompt and returned
/// to the caller. Failures become their diagnostic string.
pub fn render_context(result: &SearchResult<WebContext>) -> String {
    match result {
        Ok(context) => context.render(),
        Err(e) => e.to_string(),
    }
}
