//! Rating submission API handlers
//!
//! POST /api/ratings validates the submission against the loaded catalog
//! and appends one record. GET /api/ratings/summary reports the store size.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    db,
    error::{ApiError, ApiResult},
    models::{RubricScores, SCORE_MAX, SCORE_MIN},
    services::{AssetSelector, RatingRecorder},
    AppState,
};

/// POST /api/ratings request
#[derive(Debug, Deserialize)]
pub struct SubmitRatingRequest {
    /// Selected audio asset filename
    pub audio_file: String,
    /// Model label the rater had selected
    pub model: String,
    /// Rater name
    pub user: String,
    /// Rubric scores; absent fields default to the slider minimum
    #[serde(default)]
    pub scores: RubricScores,
}

/// POST /api/ratings response
#[derive(Debug, Serialize)]
pub struct SubmitRatingResponse {
    pub message: String,
    pub id: i64,
    pub submitted_at: DateTime<Utc>,
}

/// GET /api/ratings/summary response
#[derive(Debug, Serialize)]
pub struct RatingsSummary {
    pub count: i64,
}

/// POST /api/ratings
///
/// A record is only constructible once every input is present and valid:
/// non-empty rater name, a model label from the configured vocabulary,
/// in-range scores, and a filename whose parsed key matches a catalog row.
/// Success is only reported after the row is durable.
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(request): Json<SubmitRatingRequest>,
) -> ApiResult<Json<SubmitRatingResponse>> {
    let rater = request.user.trim();
    if rater.is_empty() {
        return Err(ApiError::BadRequest(
            "Enter your name before submitting ratings".to_string(),
        ));
    }

    if !state.config.model_labels.contains(&request.model) {
        return Err(ApiError::BadRequest(format!(
            "Unknown model label: {}",
            request.model
        )));
    }

    if let Err((label, value)) = request.scores.validate() {
        return Err(ApiError::BadRequest(format!(
            "Score for {} is {} but must be in {}..={}",
            label, value, SCORE_MIN, SCORE_MAX
        )));
    }

    let selector = AssetSelector::new(state.db.clone());
    let (_row_id, text) = selector.resolve(&request.audio_file).await?;

    let recorder = RatingRecorder::new(state.db.clone());
    let (id, submitted_at) = recorder
        .record(&request.scores, &request.audio_file, &text, &request.model, rater)
        .await?;

    Ok(Json(SubmitRatingResponse {
        message: "Ratings submitted successfully!".to_string(),
        id,
        submitted_at,
    }))
}

/// GET /api/ratings/summary
pub async fn ratings_summary(State(state): State<AppState>) -> ApiResult<Json<RatingsSummary>> {
    let count = db::ratings::count(&state.db).await?;
    Ok(Json(RatingsSummary { count }))
}

/// Build rating routes
pub fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ratings", post(submit_rating))
        .route("/api/ratings/summary", get(ratings_summary))
}
