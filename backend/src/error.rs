//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use healthcalc_shared::{validation::get_missing_fields_labels, CalculatorError, ErrorResponse};
use thiserror::Error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Required measurements are absent or non-positive
    #[error("Incomplete input: missing {}", .0.join(", "))]
    IncompleteInput(Vec<&'static str>),

    /// Present values the formulas cannot use
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        match err {
            CalculatorError::InvalidInput { field, reason } => ApiError::InvalidInput {
                field,
                message: reason.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::IncompleteInput(fields) => {
                let labels = get_missing_fields_labels(fields);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "INCOMPLETE_INPUT",
                        format!("Please provide: {}", labels.join(", ")),
                    )
                    .with_missing_fields(fields.iter().map(|f| f.to_string()).collect()),
                )
            }
            ApiError::InvalidInput { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_INPUT", message.clone()).with_field(*field),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", msg.clone()),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", msg.clone()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
