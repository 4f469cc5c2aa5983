//! Asset selection
//!
//! Filters ingested filenames by model label and resolves a selected
//! filename back to its catalog row. Filenames follow the convention
//! `{row_id}_{model_token}_{suffix}.wav`: the token before the first
//! underscore is the catalog key, and the model token is the label with
//! spaces removed.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::db;

/// Asset selection errors
#[derive(Debug, Error)]
pub enum SelectError {
    /// No ingested filename matches the chosen model label (non-fatal)
    #[error("No audio files found for the selected model: {model}.")]
    NoMatchingAssets { model: String },

    /// The filename does not start with an integer row key
    #[error("Audio file naming format is incorrect, it should start with the row_id: {filename}")]
    MalformedFilename { filename: String },

    /// The parsed row key has no catalog row
    #[error("No matching text found for row_id: {row_id}")]
    RowNotFound { row_id: i64 },

    /// Storage failure
    #[error(transparent)]
    Common(#[from] ttsr_common::Error),
}

/// Filter filenames to those containing the model label with spaces removed
///
/// Inclusion order matches input order. Matching is case-sensitive, like
/// the filename convention itself.
pub fn filter_by_model(model_label: &str, filenames: &[String]) -> Vec<String> {
    let token = model_label.replace(' ', "");
    filenames
        .iter()
        .filter(|name| name.contains(&token))
        .cloned()
        .collect()
}

/// Parse the row key from the substring before the first underscore
pub fn parse_row_id(filename: &str) -> Result<i64, SelectError> {
    let token = filename.split('_').next().unwrap_or("");
    token
        .parse::<i64>()
        .map_err(|_| SelectError::MalformedFilename {
            filename: filename.to_string(),
        })
}

/// Asset selector over the ingested filename registry and the catalog
pub struct AssetSelector {
    db: SqlitePool,
}

impl AssetSelector {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Filenames matching the model label, in ingest order
    ///
    /// An empty result is reported as `NoMatchingAssets` so callers can
    /// surface the warning and let the rater pick a different model.
    pub async fn matching_assets(&self, model_label: &str) -> Result<Vec<String>, SelectError> {
        let all = db::assets::list_filenames(&self.db).await?;
        let matching = filter_by_model(model_label, &all);

        if matching.is_empty() {
            return Err(SelectError::NoMatchingAssets {
                model: model_label.to_string(),
            });
        }

        Ok(matching)
    }

    /// Resolve a selected filename to its catalog row
    pub async fn resolve(&self, filename: &str) -> Result<(i64, String), SelectError> {
        let row_id = parse_row_id(filename)?;

        let text = db::catalog::lookup_text(&self.db, row_id)
            .await?
            .ok_or(SelectError::RowNotFound { row_id })?;

        Ok((row_id, text))
    }
}
