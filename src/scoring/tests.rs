use serde_json::{Value, json};

use super::*;
use crate::generation::{MockFailure, MockGenerator};

fn sample_score_json() -> Value {
    json!({
        "total_score": 82,
        "factual_accuracy": 22,
        "completeness": 20,
        "relevance": 21,
        "clarity": 19,
        "verdict": "Good",
        "feedback": "Accurate and relevant, but omits one detail from the expected answer.",
        "matches_expected": true
    })
}

fn valid_request() -> ScoreRequest {
    ScoreRequest::new(
        "What is the boiling point of water?",
        "Water boils at 100°C at sea level.",
        "100 degrees Celsius at one atmosphere.",
    )
}

mod request_tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_any_empty_field_rejected() {
        let base = valid_request();
        let cases = [
            ScoreRequest { query: String::new(), ..base.clone() },
            ScoreRequest { ai_answer: String::new(), ..base.clone() },
            ScoreRequest { expected_answer: String::new(), ..base.clone() },
            ScoreRequest { expected_answer: "   ".to_string(), ..base.clone() },
            ScoreRequest::default(),
        ];

        for request in cases {
            let err = request.validate().unwrap_err();
            assert_eq!(err, ScoringError::MissingFields);
            assert_eq!(
                err.to_string(),
                "Missing required fields: query, ai_answer, expected_answer"
            );
        }
    }

    #[test]
    fn test_absent_keys_decode_as_empty() {
        let request: ScoreRequest =
            serde_json::from_value(json!({"query": "q"})).expect("should decode");

        assert_eq!(request.ai_answer, "");
        assert_eq!(request.validate(), Err(ScoringError::MissingFields));
    }

    #[test]
    fn test_null_keys_decode_as_empty() {
        let request: ScoreRequest = serde_json::from_value(json!({
            "query": "q",
            "ai_answer": "a",
            "expected_answer": null
        }))
        .expect("should decode");

        assert_eq!(request.expected_answer, "");
        assert_eq!(request.validate(), Err(ScoringError::MissingFields));
    }
}

mod extraction_tests {
    use super::*;

    #[test]
    fn test_bare_json_is_trimmed() {
        assert_eq!(extract_json_payload("  \n{\"a\":1}\n "), "{\"a\":1}");
    }

    #[test]
    fn test_fenced_json_tag_stripped() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_without_tag() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_prose_before_fence_takes_first_fenced_segment() {
        let raw = "Here is the evaluation:\n```json\n{\"a\": 1}\n```\nand a second ```{\"b\":2}```";
        assert_eq!(extract_json_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_unclosed_fence_keeps_remainder() {
        let raw = "```json {\"a\": 1}";
        assert_eq!(extract_json_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_json_prefix_only_stripped_inside_fence() {
        assert_eq!(extract_json_payload("json{}"), "json{}");
    }
}

mod parse_tests {
    use super::*;

    #[test]
    fn test_fenced_reply_returns_inner_object_unchanged() {
        let inner = sample_score_json();
        let raw = format!("```json\n{}\n```", serde_json::to_string_pretty(&inner).unwrap());

        let record = parse_score_reply(&raw).expect("should parse");

        assert_eq!(serde_json::to_value(&record).unwrap(), inner);
        assert_eq!(record.verdict_kind(), Some(Verdict::Good));
        assert_eq!(record.matches_expected(), Some(true));
        assert!(record.anomalies().is_empty());
    }

    #[test]
    fn test_round_trip_is_identical() {
        let record: ScoreRecord = serde_json::from_value(sample_score_json()).unwrap();
        let reply = serde_json::to_string(&record).unwrap();

        let reparsed = parse_score_reply(&reply).expect("should parse");

        assert_eq!(reparsed, record);
        let again = parse_score_reply(&serde_json::to_string(&reparsed).unwrap()).unwrap();
        assert_eq!(again, reparsed);
    }

    #[test]
    fn test_null_keys_survive_round_trip() {
        let raw = r#"{"total_score":80,"verdict":null,"feedback":"x"}"#;

        let record = parse_score_reply(raw).expect("should parse");

        assert_eq!(record.verdict, Some(None));
        assert!(record.verdict().is_none());
        assert!(record.clarity.is_none());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"total_score": 80, "verdict": null, "feedback": "x"})
        );
        assert!(record
            .anomalies()
            .contains(&ScoreAnomaly::MissingField("verdict")));
    }

    #[test]
    fn test_null_dimension_is_reported_missing() {
        let mut inner = sample_score_json();
        inner["clarity"] = Value::Null;

        let record = parse_score_reply(&inner.to_string()).expect("should parse");

        assert!(record.dimension(Dimension::Clarity).is_none());
        assert_eq!(serde_json::to_value(&record).unwrap(), inner);
        assert!(record
            .anomalies()
            .contains(&ScoreAnomaly::MissingField("clarity")));
    }

    #[test]
    fn test_extra_keys_are_preserved() {
        let mut inner = sample_score_json();
        inner["confidence"] = json!("high");

        let record = parse_score_reply(&inner.to_string()).expect("should parse");

        assert_eq!(record.extra.get("confidence"), Some(&json!("high")));
        assert_eq!(serde_json::to_value(&record).unwrap(), inner);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let raw = json!({
            "total_score": 140,
            "factual_accuracy": 40,
            "completeness": 30,
            "relevance": 35,
            "clarity": 35,
            "verdict": "Stellar",
            "feedback": "f",
            "matches_expected": true
        })
        .to_string();

        let record = parse_score_reply(&raw).expect("valid JSON is accepted as-is");

        assert_eq!(record.total_score().and_then(|n| n.as_i64()), Some(140));
        let anomalies = record.anomalies();
        assert!(anomalies.contains(&ScoreAnomaly::TotalOutOfRange { value: 140.0 }));
        assert!(anomalies.contains(&ScoreAnomaly::DimensionOutOfRange {
            dimension: Dimension::FactualAccuracy,
            value: 40.0,
        }));
        assert!(anomalies.contains(&ScoreAnomaly::UnknownVerdict("Stellar".to_string())));
    }

    #[test]
    fn test_missing_keys_pass_through() {
        let record = parse_score_reply(r#"{"total_score": 70}"#).expect("should parse");

        assert!(record.factual_accuracy.is_none());
        assert!(record.verdict.is_none());
        assert!(record
            .anomalies()
            .contains(&ScoreAnomaly::MissingField("factual_accuracy")));
    }

    #[test]
    fn test_fractional_scores_accepted() {
        let record =
            parse_score_reply(r#"{"total_score": 50.5, "clarity": 12.5}"#).expect("should parse");
        assert_eq!(record.dimension(Dimension::Clarity).and_then(|n| n.as_f64()), Some(12.5));
    }

    #[test]
    fn test_prose_is_invalid_json() {
        let err = parse_score_reply("The AI answer is pretty good overall.").unwrap_err();
        assert!(matches!(err, ScoreParseError::InvalidJson(_)));
    }

    #[test]
    fn test_non_object_json_rejected() {
        let err = parse_score_reply("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ScoreParseError::NotAnObject { kind: "array" }));

        let err = parse_score_reply("85").unwrap_err();
        assert!(matches!(err, ScoreParseError::NotAnObject { kind: "number" }));
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let err = parse_score_reply(r#"{"total_score": "eighty"}"#).unwrap_err();
        assert!(matches!(err, ScoreParseError::Shape(_)));
    }
}

mod record_tests {
    use super::*;

    #[test]
    fn test_fallback_values() {
        let record = ScoreRecord::fallback();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["total_score"], 50);
        assert_eq!(value["factual_accuracy"], 13);
        assert_eq!(value["completeness"], 13);
        assert_eq!(value["relevance"], 12);
        assert_eq!(value["clarity"], 12);
        assert_eq!(value["verdict"], "Acceptable");
        assert_eq!(value["feedback"], FALLBACK_FEEDBACK);
        assert_eq!(value["matches_expected"], false);
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_fallback_is_internally_consistent() {
        assert!(ScoreRecord::fallback().anomalies().is_empty());
    }

    #[test]
    fn test_total_mismatch_detected() {
        let mut record = ScoreRecord::fallback();
        record.total_score = Some(Some(60.into()));

        assert_eq!(
            record.anomalies(),
            vec![ScoreAnomaly::TotalMismatch { total: 60.0, sum: 50.0 }]
        );
    }

    #[test]
    fn test_verdict_parsing() {
        assert_eq!("excellent".parse::<Verdict>(), Ok(Verdict::Excellent));
        assert_eq!(" Poor ".parse::<Verdict>(), Ok(Verdict::Poor));
        assert!("Great".parse::<Verdict>().is_err());
        assert_eq!(Verdict::Acceptable.to_string(), "Acceptable");
    }

    #[test]
    fn test_anomaly_display() {
        let anomaly = ScoreAnomaly::DimensionOutOfRange {
            dimension: Dimension::Clarity,
            value: 30.0,
        };
        assert_eq!(anomaly.to_string(), "`clarity` = 30 is outside 0..=25");
    }
}

mod prompt_tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs() {
        let request = valid_request();
        let prompt = scoring_prompt(&request);

        assert!(prompt.contains("Question: What is the boiling point of water?"));
        assert!(prompt.contains("AI Answer:\nWater boils at 100°C at sea level."));
        assert!(prompt.contains("User's Expected Answer:\n100 degrees Celsius at one atmosphere."));
    }

    #[test]
    fn test_prompt_describes_rubric() {
        let prompt = scoring_prompt(&valid_request());

        for dimension in Dimension::ALL {
            assert!(prompt.contains(&format!("{} (0-25)", dimension.label())));
            assert!(prompt.contains(&format!("\"{}\": <integer 0-25>", dimension.key())));
        }
        assert!(prompt.contains("\"total_score\": <integer 0-100"));
        assert!(prompt.contains("Excellent | Good | Acceptable | Poor"));
        assert!(prompt.contains("\"matches_expected\": <true or false>"));
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains("no markdown"));
        assert!(prompt.trim_end().ends_with('}'));
    }

    #[test]
    fn test_prompt_lines_are_ordered() {
        let prompt = scoring_prompt(&valid_request());

        assert!(prompt.contains(
            "(each 0-25 points):\n\
             1. Factual Accuracy (0-25): Is the AI answer factually correct?\n\
             2. Completeness (0-25): Does the AI answer cover what was expected?\n\
             3. Relevance (0-25): Does the AI answer address the question directly?\n\
             4. Clarity (0-25): Is the AI answer well-explained?\n\n"
        ));
        assert!(prompt.contains(
            "  \"clarity\": <integer 0-25>,\n  \"verdict\": \"<one of: Excellent | Good | Acceptable | Poor>\",\n"
        ));
    }
}

mod scorer_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_request_makes_no_call() {
        let generator = MockGenerator::new();
        let request = ScoreRequest::new("q", "", "expected");

        let err = score_answer(&generator, &request).await.unwrap_err();

        assert_eq!(err, ScoringError::MissingFields);
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_parsed() {
        let reply = format!("```json\n{}\n```", sample_score_json());
        let generator = MockGenerator::with_replies([reply]);

        let outcome = score_answer(&generator, &valid_request()).await.unwrap();

        assert!(matches!(outcome.source, ScoreSource::Parsed));
        assert_eq!(serde_json::to_value(&outcome.record).unwrap(), sample_score_json());
        assert_eq!(generator.call_count(), 1);
        assert!(generator.prompts()[0].contains("User's Expected Answer:"));
    }

    #[tokio::test]
    async fn test_prose_reply_falls_back() {
        let generator = MockGenerator::with_replies(["I think the answer is mostly right."]);

        let outcome = score_answer(&generator, &valid_request()).await.unwrap();

        assert!(outcome.is_fallback());
        assert!(matches!(
            outcome.source,
            ScoreSource::Fallback(FallbackReason::Parse(ScoreParseError::InvalidJson(_)))
        ));
        assert_eq!(outcome.record, ScoreRecord::fallback());
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back() {
        let generator = MockGenerator::new();
        generator.push_failure(MockFailure::NoResponse);

        let outcome = score_answer(&generator, &valid_request()).await.unwrap();

        assert!(matches!(
            outcome.source,
            ScoreSource::Fallback(FallbackReason::Generation(_))
        ));
        assert_eq!(outcome.record, ScoreRecord::fallback());
    }

    #[tokio::test]
    async fn test_missing_key_falls_back_without_call() {
        let generator = MockGenerator::unconfigured();

        let outcome = score_answer(&generator, &valid_request()).await.unwrap();

        assert_eq!(outcome.record, ScoreRecord::fallback());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_model_round_trip() {
        let record: ScoreRecord = serde_json::from_value(sample_score_json()).unwrap();
        let generator = MockGenerator::with_replies([serde_json::to_string(&record).unwrap()]);

        let outcome = score_answer(&generator, &valid_request()).await.unwrap();

        assert_eq!(outcome.record, record);
    }
}
