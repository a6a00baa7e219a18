use super::types::{Dimension, ScoreRequest, Verdict};
use crate::constants::{MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE};

/// Builds the rubric prompt. The reply format is bare JSON so it can be decoded directly.
pub fn scoring_prompt(request: &ScoreRequest) -> String {
    let rubric = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(i, dimension)| {
            format!(
                "{}. {} (0-{}): {}\n",
                i + 1,
                dimension.label(),
                MAX_DIMENSION_SCORE,
                dimension.question()
            )
        })
        .collect::<String>();

    let dimension_keys = Dimension::ALL
        .iter()
        .map(|dimension| format!("  \"{}\": <integer 0-{}>,\n", dimension.key(), MAX_DIMENSION_SCORE))
        .collect::<String>();

    let verdicts = Verdict::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "You are an expert answer evaluator. Compare the AI-generated answer with the user's \
         expected answer for the given question.\n\n\
         Question: {query}\n\n\
         AI Answer:\n{ai_answer}\n\n\
         User's Expected Answer:\n{expected}\n\n\
         Evaluate on these {count} dimensions (each 0-{MAX_DIMENSION_SCORE} points):\n\
         {rubric}\
         \nRespond ONLY with valid JSON in this exact format (no markdown, no code fences):\n\
         {{\n  \"total_score\": <integer 0-{MAX_TOTAL_SCORE}, the sum of the four dimensions>,\n\
         {dimension_keys}  \
         \"verdict\": \"<one of: {verdicts}>\",\n  \
         \"feedback\": \"<2-3 sentences explaining the score and key differences>\",\n  \
         \"matches_expected\": <true or false>\n}}",
        query = request.query,
        ai_answer = request.ai_answer,
        expected = request.expected_answer,
        count = Dimension::ALL.len(),
    )
}
