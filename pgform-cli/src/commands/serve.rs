//! `pgform serve` - raw-SQL app with health check and form submission

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pgform_core::{SqlAppConfig, DEFAULT_DB_TIMEOUT_SECS};
use pgform_server::http::{run_sql_server, AppState, ServerConfig};
use pgform_server::{create_pool, PgEntryStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Seconds a request waits for a database connection before failing
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_DB_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub db_timeout: u64,
}

impl ServeArgs {
    /// Resolve startup config; fails when no database URL was supplied.
    pub fn config(&self) -> Result<SqlAppConfig> {
        SqlAppConfig::new(
            self.database_url.clone(),
            self.bind,
            Duration::from_secs(self.db_timeout),
        )
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }
}

/// Run the SQL app (blocks until shutdown)
pub async fn run_serve(config: SqlAppConfig) -> Result<()> {
    let pool = create_pool(&config.database_url, config.acquire_timeout).context("Invalid DATABASE_URL")?;
    let state = AppState::new(Arc::new(PgEntryStore::new(pool.clone())));

    tracing::info!("Starting pgform SQL app on {}", config.bind_addr);

    let result = run_sql_server(
        state,
        ServerConfig {
            bind_addr: config.bind_addr,
        },
    )
    .await;

    pool.close().await;
    result.context("Server error")
}
