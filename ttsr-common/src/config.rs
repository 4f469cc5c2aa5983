//! Configuration loading and resolution
//!
//! Settings are resolved per-field with the following priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or unreadable TOML file never terminates startup; the service
//! logs a warning and continues with the remaining tiers.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the root data folder
pub const ENV_ROOT_FOLDER: &str = "TTSR_ROOT_FOLDER";
/// Environment variable naming the listen port
pub const ENV_PORT: &str = "TTSR_PORT";
/// Environment variable holding the admin export token
pub const ENV_ADMIN_TOKEN: &str = "TTSR_ADMIN_TOKEN";

/// Database filename inside the root folder
pub const DATABASE_FILENAME: &str = "ttsrate.db";
/// Audio asset directory name inside the root folder
pub const AUDIO_DIR_NAME: &str = "audio";

/// Model label vocabulary used when none is configured
pub fn default_model_labels() -> Vec<String> {
    [
        "Google TTS",
        "Facebook MMS",
        "Indic TTS",
        "Venkaiah TTS",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Compiled per-platform defaults
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub port: u16,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let root_folder = dirs::data_local_dir()
            .map(|d| d.join("ttsrate"))
            .unwrap_or_else(|| PathBuf::from("./ttsrate_data"));

        Self {
            root_folder,
            port: 5731,
        }
    }
}

/// TOML config file schema
///
/// All fields optional; absent fields fall through to the next tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub admin_token: Option<String>,
    pub model_labels: Option<Vec<String>>,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Default config file location: `<config_dir>/ttsrate/config.toml`
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ttsrate").join("config.toml"))
}

/// Per-field overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub admin_token: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root data folder; holds the database and the audio directory
    pub root_folder: PathBuf,
    /// HTTP listen port
    pub port: u16,
    /// Admin export token; `None` disables the export surface
    pub admin_token: Option<String>,
    /// Model label vocabulary offered to raters
    pub model_labels: Vec<String>,
}

impl Config {
    /// Resolve the configuration from all tiers
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        let defaults = CompiledDefaults::for_current_platform();
        let toml_cfg = load_toml_tier(overrides.config_file.as_deref());

        let root_folder = overrides
            .root_folder
            .or_else(|| std::env::var(ENV_ROOT_FOLDER).ok().map(PathBuf::from))
            .or_else(|| toml_cfg.root_folder.clone())
            .unwrap_or(defaults.root_folder);

        let port = overrides
            .port
            .or_else(|| env_port())
            .or(toml_cfg.port)
            .unwrap_or(defaults.port);

        let admin_token = overrides
            .admin_token
            .or_else(|| std::env::var(ENV_ADMIN_TOKEN).ok())
            .or_else(|| toml_cfg.admin_token.clone())
            .filter(|t| !t.trim().is_empty());

        let model_labels = toml_cfg
            .model_labels
            .filter(|labels| !labels.is_empty())
            .unwrap_or_else(default_model_labels);

        Self {
            root_folder,
            port,
            admin_token,
            model_labels,
        }
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILENAME)
    }

    /// Directory holding ingested audio assets
    pub fn audio_dir(&self) -> PathBuf {
        self.root_folder.join(AUDIO_DIR_NAME)
    }

    /// Create the root folder and audio directory if missing
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        std::fs::create_dir_all(self.audio_dir())?;
        Ok(())
    }
}

/// Load the TOML tier, tolerating a missing default file
fn load_toml_tier(explicit: Option<&Path>) -> TomlConfig {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_file() {
            Some(p) if p.exists() => p,
            _ => return TomlConfig::default(),
        },
    };

    match TomlConfig::load(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

fn env_port() -> Option<u16> {
    let raw = std::env::var(ENV_PORT).ok()?;
    match raw.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}: {:?}", ENV_PORT, raw);
            None
        }
    }
}
