//! Search-and-answer: web context → prompt → generation.

pub mod error;
pub mod prompt;
pub mod types;


use tracing::instrument;

pub use error::AnswerError;
pub use prompt::answer_prompt;
pub use types::{Answer, AnswerResult, SearchQuery};

use crate::generation::TextGenerator;
use crate::search::{WebSearch, render_context};

/// Searches for `query`, then asks `generator` to answer with the results as context.
///
/// A failed search still produces an answer: its diagnostic text stands in for the context.
#[instrument(skip_all, fields(query = %query.as_str()))]
pub async fn search_and_answer<S, G>(search: &S, generator: &G, query: &SearchQuery) -> Answer
where
    S: WebSearch + ?Sized,
    G: TextGenerator + ?Sized,
{
    let web_context = search.search(query.as_str()).await;
    let rendered_context = render_context(&web_context);

    let prompt = answer_prompt(query.as_str(), &rendered_context);
    let ai_answer = generator.generate(&prompt).await;

    Answer {
        query: query.as_str().to_string(),
        web_context,
        rendered_context,
        ai_answer,
    }
}
