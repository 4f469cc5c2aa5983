//! Catalog loading
//!
//! Parses an uploaded tabular byte stream into catalog rows and replaces
//! the persisted catalog. The stream must carry `row_id` and `Text`
//! columns; any other columns are ignored.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::db;
use crate::models::CatalogRow;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required column header is absent
    #[error("The uploaded file must contain columns named 'row_id' and 'Text' (missing: {0})")]
    MissingColumn(&'static str),

    /// A row_id cell is not an integer
    #[error("Invalid row_id {value:?} on line {line}")]
    InvalidRowId { line: usize, value: String },

    /// The byte stream is not parseable tabular data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Storage failure
    #[error(transparent)]
    Common(#[from] ttsr_common::Error),
}

/// Parse a CSV byte stream into catalog rows
///
/// Column order is free; lookup is by header name. Lines are numbered from
/// 1 with the header on line 1, so error messages match what a rater sees
/// in a spreadsheet editor.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<CatalogRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = reader.headers()?.clone();
    let row_id_idx = headers
        .iter()
        .position(|h| h == "row_id")
        .ok_or(CatalogError::MissingColumn("row_id"))?;
    let text_idx = headers
        .iter()
        .position(|h| h == "Text")
        .ok_or(CatalogError::MissingColumn("Text"))?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 2;

        let raw_id = record.get(row_id_idx).unwrap_or("").trim();
        let row_id = raw_id.parse::<i64>().map_err(|_| CatalogError::InvalidRowId {
            line,
            value: raw_id.to_string(),
        })?;

        let text = record.get(text_idx).unwrap_or("").to_string();
        rows.push(CatalogRow { row_id, text });
    }

    Ok(rows)
}

/// Catalog loader
pub struct CatalogLoader {
    db: SqlitePool,
}

impl CatalogLoader {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Parse the uploaded bytes and replace the persisted catalog
    ///
    /// A parse failure leaves the previous catalog intact: nothing is
    /// written until the whole stream has parsed.
    pub async fn load(&self, bytes: &[u8]) -> Result<usize, CatalogError> {
        let rows = parse_catalog(bytes)?;
        let count = db::catalog::replace_catalog(&self.db, &rows).await?;
        Ok(count)
    }
}
