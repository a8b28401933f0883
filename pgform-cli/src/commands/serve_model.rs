//! `pgform serve-model` - model app configured from a TOML file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pgform_core::ModelAppConfig;
use pgform_server::create_pool;
use pgform_server::http::{run_model_server, ModelState, ServerConfig};

/// Arguments for the serve-model command
#[derive(Parser, Debug)]
pub struct ServeModelArgs {
    /// Path to the TOML config file
    #[arg(long, short = 'c', default_value = pgform_core::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl ServeModelArgs {
    pub fn load_config(&self) -> Result<ModelAppConfig> {
        ModelAppConfig::load(&self.config)
            .with_context(|| format!("Failed to load config from {}", self.config.display()))
    }
}

/// Run the model app (blocks until shutdown)
pub async fn run_serve_model(config: ModelAppConfig) -> Result<()> {
    let pool = create_pool(&config.database_url, config.acquire_timeout())
        .context("Invalid database_url in config")?;

    tracing::info!(debug = config.debug, "Starting pgform model app on {}", config.bind);

    let result = run_model_server(
        ModelState { pool: pool.clone() },
        ServerConfig {
            bind_addr: config.bind,
        },
    )
    .await;

    pool.close().await;
    result.context("Server error")
}
