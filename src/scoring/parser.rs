use serde_json::Value;

use super::error::ScoreParseError;
use super::types::ScoreRecord;

/// Markdown code fence.
pub const FENCE: &str = "```";

const JSON_TAG: &str = "json";

/// Isolates the JSON payload of a model reply.
///
/// The reply is trimmed. If it contains a fence, the text between the first and second
/// fence is kept and a leading `json` language tag is removed. The result is trimmed again.
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.contains(FENCE) {
        return trimmed;
    }

    let segment = trimmed.split(FENCE).nth(1).unwrap_or_default();
    segment.strip_prefix(JSON_TAG).unwrap_or(segment).trim()
}

/// Decodes a model reply into a [`ScoreRecord`]. No range or sum checks are applied.
pub fn parse_score_reply(raw: &str) -> Result<ScoreRecord, ScoreParseError> {
    let payload = extract_json_payload(raw);
    let value: Value = serde_json::from_str(payload).map_err(ScoreParseError::InvalidJson)?;

    let kind = match &value {
        Value::Object(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("boolean"),
        Value::Number(_) => Some("number"),
        Value::String(_) => Some("string"),
        Value::Array(_) => Some("array"),
    };
    if let Some(kind) = kind {
        return Err(ScoreParseError::NotAnObject { kind });
    }

    serde_json::from_value(value).map_err(ScoreParseError::Shape)
}
