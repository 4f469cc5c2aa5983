//! Rating recording
//!
//! Builds the persisted record from a resolved submission and appends it
//! to the store. The timestamp is assigned here, server-side, at commit
//! time. Repeat submissions accumulate; the store never overwrites.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use ttsr_common::Result;

use crate::db;
use crate::models::RubricScores;

/// Rating recorder
pub struct RatingRecorder {
    db: SqlitePool,
}

impl RatingRecorder {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Append one rating record, returning its store id and timestamp
    pub async fn record(
        &self,
        scores: &RubricScores,
        audio_file: &str,
        text: &str,
        model: &str,
        rater: &str,
    ) -> Result<(i64, DateTime<Utc>)> {
        let submitted_at = Utc::now();

        let id = db::ratings::insert_rating(
            &self.db, scores, audio_file, text, model, rater, submitted_at,
        )
        .await?;

        tracing::info!(
            id,
            audio_file = %audio_file,
            model = %model,
            rater = %rater,
            "Rating recorded"
        );

        Ok((id, submitted_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_assigns_timestamp_no_earlier_than_start() {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        ttsr_common::db::init_tables(&pool).await.unwrap();
        let recorder = RatingRecorder::new(pool.clone());

        let start = Utc::now();
        let (id, submitted_at) = recorder
            .record(
                &RubricScores::default(),
                "7_GoogleTTS_sample.wav",
                "Hello world",
                "Google TTS",
                "Alice",
            )
            .await
            .unwrap();

        assert!(submitted_at >= start);
        assert_eq!(db::ratings::count(&pool).await.unwrap(), 1);

        let records = db::ratings::fetch_all(&pool).await.unwrap();
        assert_eq!(records[0].id, id);
    }
}
