//! Catalog API handlers
//!
//! POST /api/catalog uploads a CSV catalog, GET /api/catalog reports the
//! currently loaded row count.

use axum::{
    body::Bytes,
    extract::State,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::{
    db,
    error::{ApiError, ApiResult},
    services::CatalogLoader,
    AppState,
};

/// Catalog state summary
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    /// Number of loaded catalog rows
    pub rows: i64,
}

/// POST /api/catalog
///
/// Body is the raw CSV byte stream. Replaces the loaded catalog; a schema
/// or parse failure leaves the previous catalog untouched.
pub async fn upload_catalog(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<CatalogSummary>> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("Empty catalog upload".to_string()));
    }

    let loader = CatalogLoader::new(state.db.clone());
    let rows = loader.load(&body).await?;

    Ok(Json(CatalogSummary { rows: rows as i64 }))
}

/// GET /api/catalog
pub async fn catalog_summary(State(state): State<AppState>) -> ApiResult<Json<CatalogSummary>> {
    let rows = db::catalog::count_rows(&state.db).await?;
    Ok(Json(CatalogSummary { rows }))
}

/// Build catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/api/catalog", post(upload_catalog).get(catalog_summary))
}
