//! Error types for top100-api
//!
//! Two failure kinds reach the wire: an upstream fetch failure and a missing
//! table on an otherwise fetched page. Both map to HTTP 500 with a
//! human-readable `message` field; the underlying cause is logged, never
//! serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure of a single upstream page fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with something other than 200
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    /// Transport-level failure (DNS, timeout, connection reset)
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// API error type
///
/// Display text doubles as the wire `message` field, so variant messages
/// are part of the HTTP contract.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Population page fetch failed (500)
    #[error("Failed to fetch data")]
    FetchData(#[source] FetchError),

    /// Songs page fetch failed (500)
    #[error("Failed to fetch page")]
    FetchPage(#[source] FetchError),

    /// Expected table element absent from the fetched page (500)
    #[error("Table not found")]
    TableNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::FetchData(source) | ApiError::FetchPage(source) => {
                tracing::error!(error = %source, "Upstream fetch failed");
            }
            ApiError::TableNotFound => {
                tracing::error!("Expected table missing from upstream page");
            }
        }

        let body = Json(json!({ "message": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
