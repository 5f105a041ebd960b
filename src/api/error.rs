//! Error responses for the HTTP surface.
//!
//! Every error is a JSON object with a single `error` message and the
//! matching status code.

use crate::aggregator::AggregatorError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// `{"error": "<message>"}` with an HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    status: u16,
}

impl ApiError {
    /// Create a bad request error (400).
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
        }
    }

    /// Create a not found error (404).
    pub fn not_found(message: &str) -> Self {
        Self {
            error: message.to_string(),
            status: StatusCode::NOT_FOUND.as_u16(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AggregatorError> for ApiError {
    fn from(err: AggregatorError) -> Self {
        match err {
            AggregatorError::NotFound(_) => ApiError::not_found(&err.to_string()),
            AggregatorError::InvalidInput(message) => ApiError::bad_request(&message),
        }
    }
}

/// Oversized bodies keep their 413; every other rejection is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self {
                error: "Request body too large".to_string(),
                status: StatusCode::PAYLOAD_TOO_LARGE.as_u16(),
            };
        }
        ApiError::bad_request(&format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
