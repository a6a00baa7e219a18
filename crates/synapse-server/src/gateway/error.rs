use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use synapse::{AnswerError, ScoringError};

use super::{SYNAPSE_STATUS_HEADER, SYNAPSE_STATUS_INVALID};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or blank required field. Rendered with 200 like any other payload.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid JSON body")]
    InvalidBody { reason: String },

    #[error("Not found")]
    NotFound,
}

impl From<AnswerError> for GatewayError {
    fn from(err: AnswerError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

impl From<ScoringError> for GatewayError {
    fn from(err: ScoringError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Validation(_) => StatusCode::OK,
            GatewayError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SYNAPSE_STATUS_HEADER,
            HeaderValue::from_static(SYNAPSE_STATUS_INVALID),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, headers, body).into_response()
    }
}
