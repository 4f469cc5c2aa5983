//! Error types for ttsr-ui
//!
//! Domain conditions (schema violations, malformed filenames, unknown
//! catalog rows) map to distinct HTTP statuses and stable error codes so
//! the page script can report them inline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::asset_selector::SelectError;
use crate::services::audio_ingestor::IngestError;
use crate::services::catalog_loader::CatalogError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Uploaded catalog does not satisfy the required tabular schema (400)
    #[error("Schema error: {0}")]
    Schema(String),

    /// Audio filename does not start with an integer row key (422)
    #[error("Malformed filename: {0}")]
    MalformedFilename(String),

    /// Parsed row key has no catalog row (404)
    #[error("No matching text found for row_id: {0}")]
    RowNotFound(i64),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Export token mismatch (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Export surface disabled (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// ttsr-common error
    #[error("Common error: {0}")]
    Common(#[from] ttsr_common::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Schema(msg) => (StatusCode::BAD_REQUEST, "SCHEMA_ERROR", msg),
            ApiError::MalformedFilename(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_FILENAME",
                msg,
            ),
            ApiError::RowNotFound(row_id) => (
                StatusCode::NOT_FOUND,
                "ROW_NOT_FOUND",
                format!("No matching text found for row_id: {}", row_id),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Io(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                err.to_string(),
            ),
            ApiError::Database(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMMON_ERROR",
                err.to_string(),
            ),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingColumn(_) | CatalogError::InvalidRowId { .. } => {
                ApiError::Schema(err.to_string())
            }
            CatalogError::Csv(e) => ApiError::Schema(format!("Unreadable tabular data: {}", e)),
            CatalogError::Common(e) => ApiError::Common(e),
        }
    }
}

impl From<SelectError> for ApiError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::NoMatchingAssets { model } => ApiError::NotFound(format!(
                "No audio files found for the selected model: {}.",
                model
            )),
            SelectError::MalformedFilename { filename } => ApiError::MalformedFilename(format!(
                "Audio file naming format is incorrect, expected a leading row_id: {}",
                filename
            )),
            SelectError::RowNotFound { row_id } => ApiError::RowNotFound(row_id),
            SelectError::Common(e) => ApiError::Common(e),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::InvalidFilename(name) => {
                ApiError::BadRequest(format!("Rejected audio filename: {}", name))
            }
            IngestError::Io(e) => ApiError::Io(e),
            IngestError::Common(e) => ApiError::Common(e),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
