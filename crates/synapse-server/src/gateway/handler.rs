use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use synapse::{
    ScoreRequest, ScoreSource, SearchQuery, TextGenerator, WebSearch, score_answer,
    search_and_answer,
};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::gateway::{
    SYNAPSE_STATUS_DEGRADED, SYNAPSE_STATUS_FALLBACK, SYNAPSE_STATUS_HEADER, SYNAPSE_STATUS_OK,
};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn search_handler<S, G>(
    State(state): State<HandlerState<S, G>>,
    body: Bytes,
) -> Result<Response, GatewayError>
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    let request: SearchRequest = parse_json_body(&body)?;
    let query = SearchQuery::parse(request.query.as_deref().unwrap_or_default())?;

    let answer = search_and_answer(state.search.as_ref(), state.generator.as_ref(), &query).await;

    if let Err(e) = &answer.web_context {
        warn!(error = %e, "Web search failed; answering without context");
    }
    if let Err(e) = &answer.ai_answer {
        warn!(error = %e, "Generation failed; returning diagnostic as answer");
    }

    let status = if answer.is_degraded() {
        SYNAPSE_STATUS_DEGRADED
    } else {
        SYNAPSE_STATUS_OK
    };
    info!(status, "Search answered");

    Ok(make_response(status, answer.into_result()))
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn score_handler<S, G>(
    State(state): State<HandlerState<S, G>>,
    body: Bytes,
) -> Result<Response, GatewayError>
where
    S: WebSearch + 'static,
    G: TextGenerator + 'static,
{
    let request: ScoreRequest = parse_json_body(&body)?;

    let outcome = score_answer(state.generator.as_ref(), &request).await?;

    let status = match &outcome.source {
        ScoreSource::Parsed => {
            let anomalies = outcome.record.anomalies();
            if anomalies.is_empty() {
                debug!("Score reply decoded cleanly");
            } else {
                let summary = anomalies
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(anomalies = %summary, "Score reply departs from rubric; passing through");
            }
            SYNAPSE_STATUS_OK
        }
        ScoreSource::Fallback(reason) => {
            warn!(reason = %reason, "Score reply unusable; returning fallback record");
            SYNAPSE_STATUS_FALLBACK
        }
    };
    info!(status, "Score returned");

    Ok(make_response(status, outcome.record))
}

pub(crate) fn make_response<T: serde::Serialize>(status: &'static str, body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(SYNAPSE_STATUS_HEADER, HeaderValue::from_static(status));
    (StatusCode::OK, headers, Json(body)).into_response()
}

/// Decodes a JSON object body regardless of `Content-Type`.
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    let decoded: Result<T, String> = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|e| e.to_string())
        .and_then(|value| {
            if value.is_object() {
                serde_json::from_value(value).map_err(|e| e.to_string())
            } else {
                Err("body is not a JSON object".to_string())
            }
        });

    decoded.map_err(|reason| {
        warn!(reason = %reason, body_len = body.len(), "Rejected request body");
        GatewayError::InvalidBody { reason }
    })
}
