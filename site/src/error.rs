//! Unified error types for the IriLine site
//!
//! This module defines error types for each layer:
//! - `FeedError`: a feed could not be loaded (the "feed unavailable" condition)
//! - `AppError`: Application layer errors (wraps feed errors for HTTP responses)
//!
//! An empty section, grid or hero pool is a valid state, never an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Feed loading errors. Every variant means the feed is unavailable.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed unavailable: request to {location} failed: {source}")]
    Request {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Feed unavailable: {location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("Feed unavailable: could not read {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Feed unavailable: {location} is not a feed document: {message}")]
    Parse { location: String, message: String },
}

impl FeedError {
    /// Location of the feed that failed
    pub fn location(&self) -> &str {
        match self {
            FeedError::Request { location, .. }
            | FeedError::Status { location, .. }
            | FeedError::Read { location, .. }
            | FeedError::Parse { location, .. } => location,
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    FeedUnavailable(#[from] FeedError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::FeedUnavailable(e) => {
                tracing::error!("Feed error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Feed unavailable",
                    Some(e.location().to_string()),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
