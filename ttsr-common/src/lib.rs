//! # ttsrate Common Library
//!
//! Shared code for the ttsrate service:
//! - Error types
//! - Configuration resolution (CLI > environment > TOML > compiled default)
//! - SQLite database initialization

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
