//! Database access for ttsr-ui
//!
//! Query layer over the shared SQLite database. Table creation lives in
//! ttsr-common so tests can initialize in-memory pools the same way the
//! binary does.

pub mod assets;
pub mod catalog;
pub mod ratings;
