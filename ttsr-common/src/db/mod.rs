//! Database access for ttsrate
//!
//! One SQLite database holds the uploaded text catalog, the audio asset
//! registry, and the append-only rating store.

use crate::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Opens (or creates) the database file and ensures all tables exist.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create ttsrate tables if they don't exist
///
/// Also used by tests against in-memory pools.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    // Text catalog: one row per reference sentence, keyed by row_id.
    // Replaced wholesale on each catalog upload.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS catalog (
            row_id INTEGER PRIMARY KEY,
            text TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Audio asset registry: the autoincrement id preserves ingest order,
    // which asset listings must reproduce.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS audio_assets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            filename TEXT NOT NULL UNIQUE,
            uploaded_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Rating store: append-only, one row per submission.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ratings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            simple_sentences INTEGER NOT NULL,
            questions INTEGER NOT NULL,
            fluency INTEGER NOT NULL,
            punctuation_handling INTEGER NOT NULL,
            technical_terms INTEGER NOT NULL,
            monotonicity INTEGER NOT NULL,
            audio_file TEXT NOT NULL,
            text TEXT NOT NULL,
            model TEXT NOT NULL,
            rater TEXT NOT NULL,
            submitted_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (catalog, audio_assets, ratings)");

    Ok(())
}
