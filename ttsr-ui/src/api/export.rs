//! Store export API handler
//!
//! POST /api/export renders the whole rating store as a CSV attachment,
//! gated on the configured admin token. With no token configured the
//! surface is disabled outright; data egress fails closed.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{
    db,
    error::{ApiError, ApiResult},
    models::{RatingRecord, RubricScores},
    AppState,
};

/// POST /api/export request
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub token: String,
}

/// POST /api/export
pub async fn export_store(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Response> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        return Err(ApiError::Forbidden(
            "Export is disabled: no admin token is configured".to_string(),
        ));
    };

    if !token_matches(expected, &request.token) {
        tracing::warn!("Export request with invalid token rejected");
        return Err(ApiError::Unauthorized("Invalid export token".to_string()));
    }

    let records = db::ratings::fetch_all(&state.db).await?;
    let csv_bytes = render_csv(&records)?;

    tracing::info!(records = records.len(), "Rating store exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"ratings_export.csv\"",
            ),
        ],
        csv_bytes,
    )
        .into_response())
}

/// Compare tokens via their SHA-256 digests
fn token_matches(expected: &str, provided: &str) -> bool {
    Sha256::digest(expected.as_bytes()) == Sha256::digest(provided.as_bytes())
}

/// Render the store as CSV, one line per record in submission order
///
/// Column order: the six rubric dimensions, then Audio File, Text, Model,
/// User, Timestamp.
pub fn render_csv(records: &[RatingRecord]) -> Result<Vec<u8>, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = RubricScores::default()
        .fields()
        .into_iter()
        .map(|(label, _)| label.to_string())
        .collect();
    header.extend(
        ["Audio File", "Text", "Model", "User", "Timestamp"]
            .iter()
            .map(|s| s.to_string()),
    );
    writer
        .write_record(&header)
        .map_err(|e| ApiError::Internal(format!("CSV render failed: {}", e)))?;

    for record in records {
        let mut fields: Vec<String> = record
            .scores
            .fields()
            .into_iter()
            .map(|(_, value)| value.to_string())
            .collect();
        fields.push(record.audio_file.clone());
        fields.push(record.text.clone());
        fields.push(record.model.clone());
        fields.push(record.rater.clone());
        fields.push(record.submitted_at.to_rfc3339());

        writer
            .write_record(&fields)
            .map_err(|e| ApiError::Internal(format!("CSV render failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| ApiError::Internal(format!("CSV render failed: {}", e)))
}

/// Build export routes
pub fn export_routes() -> Router<AppState> {
    Router::new().route("/api/export", post(export_store))
}
