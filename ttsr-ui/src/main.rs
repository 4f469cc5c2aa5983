//! ttsr-ui - TTS audio rating web application
//!
//! Serves the rating form at `/`, the JSON API behind it, and ingested
//! audio clips for playback. One SQLite database in the root folder holds
//! the text catalog, the asset registry, and the append-only rating store.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use ttsr_common::config::{Config, ConfigOverrides};
use ttsr_ui::services::AudioIngestor;
use ttsr_ui::{build_router, AppState};

/// Command-line overrides; every flag also has an environment and TOML tier
#[derive(Debug, Parser)]
#[command(name = "ttsr-ui", version, about = "TTS audio rating web application")]
struct Cli {
    /// Root data folder (holds the database and the audio directory)
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// HTTP listen port
    #[arg(long)]
    port: Option<u16>,

    /// Admin export token (omit to disable the export surface)
    #[arg(long)]
    admin_token: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting ttsr-ui (TTS Rating) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = Config::resolve(ConfigOverrides {
        root_folder: cli.root_folder,
        port: cli.port,
        admin_token: cli.admin_token,
        config_file: cli.config,
    });

    config.ensure_directories()?;
    info!("Root folder: {}", config.root_folder.display());

    let db_path = config.database_path();
    info!("Database: {}", db_path.display());

    let db_pool = ttsr_common::db::init_database_pool(&db_path).await?;
    info!("Database connection established");

    // Pick up clips ingested by a previous process
    let ingestor = AudioIngestor::new(db_pool.clone(), config.audio_dir());
    ingestor.register_existing().await?;

    if config.admin_token.is_none() {
        info!("Admin export disabled (no admin token configured)");
    }

    let port = config.port;
    let state = AppState::new(db_pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
