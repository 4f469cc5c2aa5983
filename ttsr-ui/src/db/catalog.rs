//! Text catalog persistence

use sqlx::SqlitePool;
use ttsr_common::Result;

use crate::models::CatalogRow;

/// Replace the whole catalog inside one transaction
///
/// A catalog upload is the explicit "start a new rating session" transition,
/// so prior rows are dropped rather than merged. Duplicate row_ids within
/// one upload resolve to the last occurrence, keeping row_id a unique key.
pub async fn replace_catalog(pool: &SqlitePool, rows: &[CatalogRow]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM catalog").execute(&mut *tx).await?;

    for row in rows {
        sqlx::query("INSERT OR REPLACE INTO catalog (row_id, text) VALUES (?, ?)")
            .bind(row.row_id)
            .bind(&row.text)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(rows = rows.len(), "Catalog replaced");

    Ok(rows.len())
}

/// Look up the reference text for a row id
pub async fn lookup_text(pool: &SqlitePool, row_id: i64) -> Result<Option<String>> {
    let text: Option<String> = sqlx::query_scalar("SELECT text FROM catalog WHERE row_id = ?")
        .bind(row_id)
        .fetch_optional(pool)
        .await?;

    Ok(text)
}

/// Number of catalog rows currently loaded
pub async fn count_rows(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        ttsr_common::db::init_tables(&pool).await.unwrap();
        pool
    }

    fn row(row_id: i64, text: &str) -> CatalogRow {
        CatalogRow {
            row_id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_replace_preserves_every_row_keyed_by_row_id() {
        let pool = setup_test_db().await;

        let rows = vec![row(1, "one"), row(7, "Hello world"), row(3, "three")];
        let loaded = replace_catalog(&pool, &rows).await.unwrap();
        assert_eq!(loaded, 3);

        assert_eq!(count_rows(&pool).await.unwrap(), 3);
        assert_eq!(
            lookup_text(&pool, 7).await.unwrap(),
            Some("Hello world".to_string())
        );
        assert_eq!(lookup_text(&pool, 1).await.unwrap(), Some("one".to_string()));
        assert_eq!(lookup_text(&pool, 99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_drops_previous_catalog() {
        let pool = setup_test_db().await;

        replace_catalog(&pool, &[row(1, "old")]).await.unwrap();
        replace_catalog(&pool, &[row(2, "new")]).await.unwrap();

        assert_eq!(lookup_text(&pool, 1).await.unwrap(), None);
        assert_eq!(lookup_text(&pool, 2).await.unwrap(), Some("new".to_string()));
        assert_eq!(count_rows(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_row_id_last_occurrence_wins() {
        let pool = setup_test_db().await;

        replace_catalog(&pool, &[row(5, "first"), row(5, "second")])
            .await
            .unwrap();

        assert_eq!(count_rows(&pool).await.unwrap(), 1);
        assert_eq!(
            lookup_text(&pool, 5).await.unwrap(),
            Some("second".to_string())
        );
    }
}
