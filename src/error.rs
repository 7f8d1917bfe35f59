//! Error type definitions.
//!
//! Two response classes exist on the HTTP surface: a 400 for missing client
//! input and a generic 500 for everything that goes wrong between the relay
//! and the upstream instance. Upstream details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::SetLoggerError;
use serde_json::json;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// The configured instance origin is not a usable http(s) URL.
    #[error("Invalid instance origin '{origin}': {reason}")]
    InvalidInstance {
        /// The origin string as configured.
        origin: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors surfaced by the relay handlers.
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required request parameter is missing or empty.
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    /// The outbound request to the upstream instance failed.
    #[error("upstream request error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// The upstream body could not be mapped onto the output shape.
    #[error("failed to parse upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::MissingParam(name) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("missing required parameter: {name}") })),
            )
                .into_response(),
            other => {
                // Uniform failure: the caller only learns that the upstream
                // leg failed, the cause goes to the log.
                log::warn!("upstream/processing failure: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "upstream request failed" })),
                )
                    .into_response()
            }
        }
    }
}
