//! Tests for database initialization

use ttsr_common::db::{init_database_pool, init_tables};

#[tokio::test]
async fn test_init_tables_in_memory() {
    let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
    init_tables(&pool).await.unwrap();

    // All three tables exist and are empty
    for table in ["catalog", "audio_assets", "ratings"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{} should start empty", table);
    }
}

#[tokio::test]
async fn test_init_tables_is_idempotent() {
    let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
    init_tables(&pool).await.unwrap();
    init_tables(&pool).await.unwrap();
}

#[tokio::test]
async fn test_init_database_pool_creates_file_and_parent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("ttsrate.db");

    let pool = init_database_pool(&db_path).await.unwrap();

    assert!(db_path.exists(), "database file should be created");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
