use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, instrument};

use super::config::SearchConfig;
use super::error::{SearchError, SearchResult};
use super::types::WebContext;
use super::WebSearch;
use crate::constants::MAX_RELATED_TOPICS;

/// DuckDuckGo Instant Answer implementation of [`WebSearch`].
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    http: HttpClient,
    config: SearchConfig,
}

impl DuckDuckGoClient {
    /// Builds a client whose every request is bounded by `config.timeout`.
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[async_trait]
impl WebSearch for DuckDuckGoClient {
    #[instrument(skip(self), fields(url = %self.config.url))]
    async fn search(&self, query: &str) -> SearchResult<WebContext> {
        let body: Value = self
            .http
            .get(&self.config.url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?
            .json()
            .await?;

        let context = web_context_from_response(&body)?;
        debug!(snippets = context.snippets.len(), "web search complete");
        Ok(context)
    }
}

/// Extracts snippets from an instant-answer payload.
///
/// Takes `AbstractText` when non-empty, then the `Text` of each object among the first
/// [`MAX_RELATED_TOPICS`] entries of `RelatedTopics`. Non-object entries still occupy a slot.
pub fn web_context_from_response(body: &Value) -> SearchResult<WebContext> {
    let object = body.as_object().ok_or_else(|| SearchError::InvalidResponse {
        reason: "expected a JSON object".to_string(),
    })?;

    let mut snippets = Vec::new();

    if let Some(text) = non_empty_str(object.get("AbstractText")) {
        snippets.push(text.to_string());
    }

    match object.get("RelatedTopics") {
        None => {}
        Some(Value::Array(topics)) => {
            snippets.extend(
                topics
                    .iter()
                    .take(MAX_RELATED_TOPICS)
                    .filter_map(|topic| topic.as_object())
                    .filter_map(|topic| non_empty_str(topic.get("Text")))
                    .map(str::to_string),
            );
        }
        Some(other) => {
            return Err(SearchError::InvalidResponse {
                reason: format!("RelatedTopics is not a list: {}", other),
            });
        }
    }

    Ok(WebContext::new(snippets))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
