//! Answer-scoring protocol.
//!
//! The model is asked for a four-dimension rubric as bare JSON. Its reply goes through a
//! tolerant extractor (fences and a `json` tag are stripped) and a strict decoder. Anything
//! that fails to decode is replaced by [`ScoreRecord::fallback`], a neutral midpoint that
//! reads as neither a pass nor a fail.
//!
//! # No re-validation
//!
//! A reply that decodes is returned as-is: out-of-range sub-scores, a total that is not the
//! sum of its parts, or missing keys all pass through. [`ScoreRecord::anomalies`] reports
//! those cases so callers can log them; consumers should treat every field as optional.

pub mod error;
pub mod parser;
pub mod prompt;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ScoreParseError, ScoringError};
pub use parser::{FENCE, extract_json_payload, parse_score_reply};
pub use prompt::scoring_prompt;
pub use scorer::{FallbackReason, ScoreOutcome, ScoreSource, score_answer};
pub use types::{Dimension, FALLBACK_FEEDBACK, ScoreAnomaly, ScoreRecord, ScoreRequest, Verdict};
