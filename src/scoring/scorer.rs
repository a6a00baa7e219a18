use tracing::{debug, instrument};

use super::error::{ScoreParseError, ScoringError};
use super::parser::parse_score_reply;
use super::prompt::scoring_prompt;
use super::types::{ScoreRecord, ScoreRequest};
use crate::generation::{GenerationError, TextGenerator};

/// Which path produced a [`ScoreOutcome`]'s record.
#[derive(Debug)]
pub enum ScoreSource {
    /// Decoded from the model reply.
    Parsed,
    /// Replaced by [`ScoreRecord::fallback`].
    Fallback(FallbackReason),
}

#[derive(Debug)]
pub enum FallbackReason {
    Generation(GenerationError),
    Parse(ScoreParseError),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::Generation(e) => write!(f, "generation failed: {}", e),
            FallbackReason::Parse(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug)]
pub struct ScoreOutcome {
    pub record: ScoreRecord,
    pub source: ScoreSource,
}

impl ScoreOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ScoreSource::Fallback(_))
    }
}

/// Scores `request.ai_answer` against `request.expected_answer` with one model call.
///
/// Validation failures return before any call is made. After that the outcome always
/// carries a record: a generation or decode failure yields the fallback.
#[instrument(skip_all, fields(query_len = request.query.len()))]
pub async fn score_answer<G>(
    generator: &G,
    request: &ScoreRequest,
) -> Result<ScoreOutcome, ScoringError>
where
    G: TextGenerator + ?Sized,
{
    request.validate()?;

    let prompt = scoring_prompt(request);
    let reply = match generator.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            return Ok(ScoreOutcome {
                record: ScoreRecord::fallback(),
                source: ScoreSource::Fallback(FallbackReason::Generation(e)),
            });
        }
    };

    let outcome = match parse_score_reply(&reply) {
        Ok(record) => ScoreOutcome {
            record,
            source: ScoreSource::Parsed,
        },
        Err(e) => {
            debug!(reply_len = reply.len(), "score reply could not be decoded");
            ScoreOutcome {
                record: ScoreRecord::fallback(),
                source: ScoreSource::Fallback(FallbackReason::Parse(e)),
            }
        }
    };

    Ok(outcome)
}
