//! Audio upload API handler
//!
//! POST /api/audio accepts a multipart batch of wav files. Stored clips
//! are served back for playback under /audio/{filename} by the static
//! file service mounted in the router.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::{
    error::{ApiError, ApiResult},
    services::AudioIngestor,
    AppState,
};

/// POST /api/audio response
#[derive(Debug, Serialize)]
pub struct AudioUploadResponse {
    /// Number of files written
    pub saved: usize,
}

/// POST /api/audio
///
/// Multipart form with one part per file. Part names are free; each part
/// must carry a filename. The whole batch fails on the first invalid name
/// or write error.
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<AudioUploadResponse>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload {}: {}", filename, e)))?;

        files.push((filename, data.to_vec()));
    }

    if files.is_empty() {
        return Err(ApiError::BadRequest(
            "Please upload audio files.".to_string(),
        ));
    }

    let ingestor = AudioIngestor::new(state.db.clone(), state.config.audio_dir());
    let saved = ingestor.ingest(&files).await?;

    Ok(Json(AudioUploadResponse { saved }))
}

/// Build audio routes
pub fn audio_routes() -> Router<AppState> {
    Router::new().route("/api/audio", post(upload_audio))
}
