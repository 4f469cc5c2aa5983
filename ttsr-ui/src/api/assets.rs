//! Asset selection API handlers
//!
//! GET /api/models            - configured model label vocabulary
//! GET /api/assets?model=...  - ingested filenames matching a model label
//! GET /api/assets/:filename/text - resolve a filename to its catalog row

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiResult,
    services::asset_selector::SelectError,
    services::AssetSelector,
    AppState,
};

/// GET /api/models response
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.config.model_labels.clone(),
    })
}

/// Query parameters for the asset listing
#[derive(Debug, Deserialize)]
pub struct AssetQuery {
    pub model: String,
}

/// GET /api/assets response
#[derive(Debug, Serialize)]
pub struct AssetListResponse {
    pub model: String,
    pub files: Vec<String>,
    /// Present when no filename matched (non-fatal, rater may pick another model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// GET /api/assets?model=<label>
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetQuery>,
) -> ApiResult<Json<AssetListResponse>> {
    let selector = AssetSelector::new(state.db.clone());

    match selector.matching_assets(&query.model).await {
        Ok(files) => Ok(Json(AssetListResponse {
            model: query.model,
            files,
            warning: None,
        })),
        Err(err @ SelectError::NoMatchingAssets { .. }) => Ok(Json(AssetListResponse {
            model: query.model,
            files: Vec::new(),
            warning: Some(err.to_string()),
        })),
        Err(err) => Err(err.into()),
    }
}

/// GET /api/assets/:filename/text response
#[derive(Debug, Serialize)]
pub struct AssetTextResponse {
    pub audio_file: String,
    pub row_id: i64,
    pub text: String,
}

/// GET /api/assets/:filename/text
///
/// Parses the leading filename token as the catalog key and returns the
/// reference text. Malformed names are 422, unknown keys 404.
pub async fn asset_text(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<AssetTextResponse>> {
    let selector = AssetSelector::new(state.db.clone());
    let (row_id, text) = selector.resolve(&filename).await?;

    Ok(Json(AssetTextResponse {
        audio_file: filename,
        row_id,
        text,
    }))
}

/// Build asset routes
pub fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/api/models", get(list_models))
        .route("/api/assets", get(list_assets))
        .route("/api/assets/:filename/text", get(asset_text))
}
