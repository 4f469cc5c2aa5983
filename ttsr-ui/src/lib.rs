//! ttsr-ui library - TTS rating web application
//!
//! Serves the rating form UI and the JSON API behind it: catalog upload,
//! audio ingestion, model-filtered asset selection, rating submission, and
//! the gated store export.

pub mod api;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::extract::DefaultBodyLimit;
use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::services::ServeDir;
use ttsr_common::config::Config;

/// Upload bodies may carry a whole batch of wav clips
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolved service configuration
    pub config: Arc<Config>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let audio_dir = state.config.audio_dir();

    Router::new()
        // UI routes (HTML page + script)
        .route("/", get(api::ui::serve_index))
        .route("/static/app.js", get(api::ui::serve_app_js))
        // API routes
        .merge(api::catalog::catalog_routes())
        .merge(api::audio::audio_routes())
        .merge(api::assets::asset_routes())
        .merge(api::ratings::rating_routes())
        .merge(api::export::export_routes())
        .merge(api::health::health_routes())
        // Ingested clips served back for playback
        .nest_service("/audio", ServeDir::new(audio_dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
