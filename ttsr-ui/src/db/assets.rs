//! Audio asset registry persistence
//!
//! The registry records every ingested filename with a monotonic id so
//! asset listings reproduce ingest order. Re-ingesting a filename keeps
//! its original position (the file on disk is overwritten, the registry
//! row is refreshed in place).

use sqlx::SqlitePool;
use ttsr_common::Result;

/// Register an ingested filename, keeping its original ingest position
pub async fn register_asset(pool: &SqlitePool, filename: &str, uploaded_at: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO audio_assets (filename, uploaded_at)
        VALUES (?, ?)
        ON CONFLICT(filename) DO UPDATE SET uploaded_at = excluded.uploaded_at
        "#,
    )
    .bind(filename)
    .bind(uploaded_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Register a filename only if it is not already known
///
/// Used by the startup re-scan of the audio directory.
pub async fn register_asset_if_missing(
    pool: &SqlitePool,
    filename: &str,
    uploaded_at: &str,
) -> Result<bool> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO audio_assets (filename, uploaded_at) VALUES (?, ?)",
    )
    .bind(filename)
    .bind(uploaded_at)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// All registered filenames in ingest order
pub async fn list_filenames(pool: &SqlitePool) -> Result<Vec<String>> {
    let filenames: Vec<String> =
        sqlx::query_scalar("SELECT filename FROM audio_assets ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(filenames)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        ttsr_common::db::init_tables(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_listing_preserves_ingest_order() {
        let pool = setup_test_db().await;

        register_asset(&pool, "7_GoogleTTS_a.wav", "t0").await.unwrap();
        register_asset(&pool, "2_IndicTTS_b.wav", "t1").await.unwrap();
        register_asset(&pool, "5_GoogleTTS_c.wav", "t2").await.unwrap();

        assert_eq!(
            list_filenames(&pool).await.unwrap(),
            vec!["7_GoogleTTS_a.wav", "2_IndicTTS_b.wav", "5_GoogleTTS_c.wav"]
        );
    }

    #[tokio::test]
    async fn test_reingest_keeps_original_position() {
        let pool = setup_test_db().await;

        register_asset(&pool, "a.wav", "t0").await.unwrap();
        register_asset(&pool, "b.wav", "t1").await.unwrap();
        register_asset(&pool, "a.wav", "t2").await.unwrap();

        assert_eq!(list_filenames(&pool).await.unwrap(), vec!["a.wav", "b.wav"]);
    }

    #[tokio::test]
    async fn test_register_if_missing_ignores_known_names() {
        let pool = setup_test_db().await;

        register_asset(&pool, "a.wav", "t0").await.unwrap();
        assert!(!register_asset_if_missing(&pool, "a.wav", "t1").await.unwrap());
        assert!(register_asset_if_missing(&pool, "c.wav", "t1").await.unwrap());

        assert_eq!(list_filenames(&pool).await.unwrap(), vec!["a.wav", "c.wav"]);
    }
}
