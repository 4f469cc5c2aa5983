//! Audio ingestion
//!
//! Writes uploaded wav blobs into the audio directory under their original
//! filenames (overwriting on collision) and registers each name in the
//! asset registry. A write failure aborts the whole batch; per-file
//! recovery is not attempted.

use chrono::Utc;
use sqlx::SqlitePool;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

use crate::db;

/// Audio ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Filename is empty, carries path components, or is not a wav
    #[error("Invalid audio filename: {0:?}")]
    InvalidFilename(String),

    /// Directory creation or file write failure (fatal to the batch)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage failure
    #[error(transparent)]
    Common(#[from] ttsr_common::Error),
}

/// Audio ingestor
pub struct AudioIngestor {
    db: SqlitePool,
    audio_dir: PathBuf,
}

impl AudioIngestor {
    pub fn new(db: SqlitePool, audio_dir: PathBuf) -> Self {
        Self { db, audio_dir }
    }

    /// Accept a bare `.wav` filename, rejecting anything path-like
    ///
    /// Uploads name files, they never address directories; separators and
    /// parent references would escape the audio directory.
    fn validate_filename(name: &str) -> Result<&str, IngestError> {
        let ok = !name.is_empty()
            && !name.contains('/')
            && !name.contains('\\')
            && !name.contains("..")
            && name.to_ascii_lowercase().ends_with(".wav");

        if ok {
            Ok(name)
        } else {
            Err(IngestError::InvalidFilename(name.to_string()))
        }
    }

    /// Write a batch of named blobs and register each filename
    ///
    /// Existing files of the same name are overwritten; the registry keeps
    /// the original ingest position for re-uploads.
    pub async fn ingest(&self, files: &[(String, Vec<u8>)]) -> Result<usize, IngestError> {
        tokio::fs::create_dir_all(&self.audio_dir).await?;

        for (name, data) in files {
            let name = Self::validate_filename(name)?;
            let path = self.audio_dir.join(name);

            tokio::fs::write(&path, data).await?;
            db::assets::register_asset(&self.db, name, &Utc::now().to_rfc3339()).await?;

            tracing::debug!(filename = %name, bytes = data.len(), "Audio asset ingested");
        }

        Ok(files.len())
    }

    /// Register wav files already present in the audio directory
    ///
    /// Run at startup so assets ingested by a previous process remain
    /// selectable. Returns the number of newly registered files.
    pub async fn register_existing(&self) -> Result<usize, IngestError> {
        if !self.audio_dir.is_dir() {
            return Ok(0);
        }

        let mut added = 0;
        let walker = WalkDir::new(&self.audio_dir)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Error accessing entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if Self::validate_filename(&name).is_err() {
                continue;
            }

            let uploaded_at = Utc::now().to_rfc3339();
            if db::assets::register_asset_if_missing(&self.db, &name, &uploaded_at).await? {
                added += 1;
            }
        }

        if added > 0 {
            tracing::info!(added, "Registered pre-existing audio assets");
        }

        Ok(added)
    }
}
