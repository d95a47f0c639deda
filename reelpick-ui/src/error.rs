//! Error types for reelpick-ui
//!
//! Everything a handler can fail with, mapped onto the HTTP response
//! shapes the frontend expects: flat `{"error", "message"}` bodies,
//! field-keyed `errors` maps for form validation, and field-tagged
//! `details` lists for quiz validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::services::tmdb_client::TmdbError;
use reelpick_common::quiz::ValidationReport;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Quiz selections failed validation (400, field-tagged details)
    #[error("Quiz selections failed validation")]
    QuizValidation(ValidationReport),

    /// Form submission failed validation (400, field-keyed errors map)
    #[error("Form validation failed")]
    FormValidation(BTreeMap<&'static str, String>),

    /// Service misconfiguration, e.g. missing TMDB API key (500)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream catalog failure (500)
    #[error("Catalog error: {0}")]
    Upstream(#[from] TmdbError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// reelpick-common error
    #[error("Common error: {0}")]
    Common(#[from] reelpick_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::QuizValidation(report) => {
                let message = report
                    .errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "Invalid quiz selections".to_string());
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Validation error",
                        "message": message,
                        "details": report.errors,
                    })),
                )
                    .into_response()
            }
            ApiError::FormValidation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Configuration error",
                        "message": "Unable to fetch recommendations. Please try again later.",
                    })),
                )
                    .into_response()
            }
            ApiError::Upstream(err) => {
                tracing::error!("TMDB error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "External API error",
                        "message": "Unable to fetch recommendations. Please try again later.",
                    })),
                )
                    .into_response()
            }
            ApiError::Io(err) => {
                tracing::error!("IO error: {}", err);
                internal_error()
            }
            ApiError::Other(err) => {
                tracing::error!("Internal error: {}", err);
                internal_error()
            }
            ApiError::Common(err) => {
                tracing::error!("Common error: {}", err);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": "Something went wrong. Please try again later.",
        })),
    )
        .into_response()
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
