use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use super::error::ScoringError;
use crate::constants::{MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE};

/// Feedback carried by the fallback record.
pub const FALLBACK_FEEDBACK: &str = "Score could not be parsed from AI response. Try again.";

/// Inbound scoring request. Absent or `null` keys decode as empty strings and fail
/// [`validate`].
///
/// [`validate`]: ScoreRequest::validate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ai_answer: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expected_answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ScoreRequest {
    pub fn new(
        query: impl Into<String>,
        ai_answer: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            ai_answer: ai_answer.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// All three fields must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let blank = [&self.query, &self.ai_answer, &self.expected_answer]
            .iter()
            .any(|field| field.trim().is_empty());
        if blank {
            return Err(ScoringError::MissingFields);
        }
        Ok(())
    }
}

/// The four rubric dimensions, each scored 0–25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    FactualAccuracy,
    Completeness,
    Relevance,
    Clarity,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::FactualAccuracy,
        Dimension::Completeness,
        Dimension::Relevance,
        Dimension::Clarity,
    ];

    /// JSON key in the score record.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::FactualAccuracy => "factual_accuracy",
            Dimension::Completeness => "completeness",
            Dimension::Relevance => "relevance",
            Dimension::Clarity => "clarity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::FactualAccuracy => "Factual Accuracy",
            Dimension::Completeness => "Completeness",
            Dimension::Relevance => "Relevance",
            Dimension::Clarity => "Clarity",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Dimension::FactualAccuracy => "Is the AI answer factually correct?",
            Dimension::Completeness => "Does the AI answer cover what was expected?",
            Dimension::Relevance => "Does the AI answer address the question directly?",
            Dimension::Clarity => "Is the AI answer well-explained?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::Excellent,
        Verdict::Good,
        Verdict::Acceptable,
        Verdict::Poor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Acceptable => "Acceptable",
            Verdict::Poor => "Poor",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "acceptable" => Ok(Self::Acceptable),
            "poor" => Ok(Self::Poor),
            _ => Err(format!("Unknown verdict: {}", s)),
        }
    }
}

/// Rubric score as returned to callers.
///
/// Every field is optional because a model reply may omit any of them. The outer `Option`
/// is key presence and the inner one an explicit `null`, so a decoded reply serializes back
/// to the same object. Keys the model adds beyond the rubric are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub total_score: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub factual_accuracy: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub completeness: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub clarity: Option<Option<Number>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub matches_expected: Option<Option<bool>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Only runs for keys that are present; `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ScoreRecord {
    /// The neutral record used whenever a reply cannot be decoded. Sub-scores sum to the total.
    pub fn fallback() -> Self {
        Self {
            total_score: Some(Some(Number::from(50))),
            factual_accuracy: Some(Some(Number::from(13))),
            completeness: Some(Some(Number::from(13))),
            relevance: Some(Some(Number::from(12))),
            clarity: Some(Some(Number::from(12))),
            verdict: Some(Some(Verdict::Acceptable.as_str().to_string())),
            feedback: Some(Some(FALLBACK_FEEDBACK.to_string())),
            matches_expected: Some(Some(false)),
            extra: Map::new(),
        }
    }

    pub fn total_score(&self) -> Option<&Number> {
        self.total_score.as_ref().and_then(Option::as_ref)
    }

    pub fn verdict(&self) -> Option<&str> {
        self.verdict.as_ref().and_then(Option::as_deref)
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_ref().and_then(Option::as_deref)
    }

    pub fn matches_expected(&self) -> Option<bool> {
        self.matches_expected.flatten()
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&Number> {
        let field = match dimension {
            Dimension::FactualAccuracy => &self.factual_accuracy,
            Dimension::Completeness => &self.completeness,
            Dimension::Relevance => &self.relevance,
            Dimension::Clarity => &self.clarity,
        };
        field.as_ref().and_then(Option::as_ref)
    }

    /// The verdict if it is one of the four rubric values.
    pub fn verdict_kind(&self) -> Option<Verdict> {
        self.verdict().and_then(|v| v.parse().ok())
    }

    /// Lists every way this record departs from the rubric. Empty for a compliant record.
    pub fn anomalies(&self) -> Vec<ScoreAnomaly> {
        let mut anomalies = Vec::new();
        let mut sum = 0.0;
        let mut all_dimensions = true;

        for dimension in Dimension::ALL {
            match self.dimension(dimension).and_then(Number::as_f64) {
                Some(value) => {
                    if !(0.0..=MAX_DIMENSION_SCORE as f64).contains(&value) {
                        anomalies.push(ScoreAnomaly::DimensionOutOfRange { dimension, value });
                    }
                    sum += value;
                }
                None => {
                    all_dimensions = false;
                    anomalies.push(ScoreAnomaly::MissingField(dimension.key()));
                }
            }
        }

        match self.total_score().and_then(Number::as_f64) {
            Some(total) => {
                if !(0.0..=MAX_TOTAL_SCORE as f64).contains(&total) {
                    anomalies.push(ScoreAnomaly::TotalOutOfRange { value: total });
                }
                if all_dimensions && (total - sum).abs() > f64::EPSILON {
                    anomalies.push(ScoreAnomaly::TotalMismatch { total, sum });
                }
            }
            None => anomalies.push(ScoreAnomaly::MissingField("total_score")),
        }

        match self.verdict() {
            Some(verdict) if self.verdict_kind().is_none() => {
                anomalies.push(ScoreAnomaly::UnknownVerdict(verdict.to_string()));
            }
            Some(_) => {}
            None => anomalies.push(ScoreAnomaly::MissingField("verdict")),
        }

        if self.feedback().is_none() {
            anomalies.push(ScoreAnomaly::MissingField("feedback"));
        }
        if self.matches_expected().is_none() {
            anomalies.push(ScoreAnomaly::MissingField("matches_expected"));
        }

        anomalies
    }
}

/// A departure from the rubric found in a decoded record.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreAnomaly {
    MissingField(&'static str),
    DimensionOutOfRange { dimension: Dimension, value: f64 },
    TotalOutOfRange { value: f64 },
    TotalMismatch { total: f64, sum: f64 },
    UnknownVerdict(String),
}

impl fmt::Display for ScoreAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreAnomaly::MissingField(key) => write!(f, "missing field `{}`", key),
            ScoreAnomaly::DimensionOutOfRange { dimension, value } => write!(
                f,
                "`{}` = {} is outside 0..={}",
                dimension.key(),
                value,
                MAX_DIMENSION_SCORE
            ),
            ScoreAnomaly::TotalOutOfRange { value } => {
                write!(f, "`total_score` = {} is outside 0..={}", value, MAX_TOTAL_SCORE)
            }
            ScoreAnomaly::TotalMismatch { total, sum } => write!(
                f,
                "`total_score` = {} but dimensions sum to {}",
                total, sum
            ),
            ScoreAnomaly::UnknownVerdict(verdict) => write!(f, "unknown verdict '{}'", verdict),
        }
    }
}
