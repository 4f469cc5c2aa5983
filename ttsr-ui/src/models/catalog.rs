//! Text catalog types

use serde::{Deserialize, Serialize};

/// One catalog entry: a reference sentence keyed by its row id
///
/// The row id doubles as the foreign key encoded in audio filenames
/// (`{row_id}_{model_token}_{suffix}.wav`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub row_id: i64,
    pub text: String,
}
