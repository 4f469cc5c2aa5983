//! Rating store persistence
//!
//! The store is append-only: every submission becomes a new row, including
//! repeat submissions for the same clip and rater. Ordering is submission
//! order (the rowid).

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use ttsr_common::{Error, Result};

use crate::models::{RatingRecord, RubricScores};

/// Append one rating record, returning its store id
pub async fn insert_rating(
    pool: &SqlitePool,
    scores: &RubricScores,
    audio_file: &str,
    text: &str,
    model: &str,
    rater: &str,
    submitted_at: DateTime<Utc>,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO ratings (
            simple_sentences, questions, fluency,
            punctuation_handling, technical_terms, monotonicity,
            audio_file, text, model, rater, submitted_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(scores.simple_sentences as i64)
    .bind(scores.questions as i64)
    .bind(scores.fluency as i64)
    .bind(scores.punctuation_handling as i64)
    .bind(scores.technical_terms as i64)
    .bind(scores.monotonicity as i64)
    .bind(audio_file)
    .bind(text)
    .bind(model)
    .bind(rater)
    .bind(submitted_at.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All rating records in submission order
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<RatingRecord>> {
    let rows = sqlx::query(
        r#"
        SELECT id, simple_sentences, questions, fluency,
               punctuation_handling, technical_terms, monotonicity,
               audio_file, text, model, rater, submitted_at
        FROM ratings ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let submitted_at_raw: String = row.get("submitted_at");
            let submitted_at = DateTime::parse_from_rfc3339(&submitted_at_raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    Error::Internal(format!(
                        "Invalid timestamp in ratings store: {:?}: {}",
                        submitted_at_raw, e
                    ))
                })?;

            Ok(RatingRecord {
                id: row.get("id"),
                scores: RubricScores {
                    simple_sentences: row.get::<i64, _>("simple_sentences") as u8,
                    questions: row.get::<i64, _>("questions") as u8,
                    fluency: row.get::<i64, _>("fluency") as u8,
                    punctuation_handling: row.get::<i64, _>("punctuation_handling") as u8,
                    technical_terms: row.get::<i64, _>("technical_terms") as u8,
                    monotonicity: row.get::<i64, _>("monotonicity") as u8,
                },
                audio_file: row.get("audio_file"),
                text: row.get("text"),
                model: row.get("model"),
                rater: row.get("rater"),
                submitted_at,
            })
        })
        .collect()
}

/// Number of records in the store
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
