//! pgform CLI - PostgreSQL-backed HTTP services
//!
//! - `serve`: raw-SQL app (`/`, `/health`, `/api/submit`), configured by `DATABASE_URL`
//! - `serve-model`: model app (`/`), configured by a TOML file

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pgform",
    author,
    version,
    about = "Minimal HTTP services over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the SQL app: health check and form submission
    Serve(commands::serve::ServeArgs),
    /// Run the model app configured from a TOML file
    ServeModel(commands::serve_model::ServeModelArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Existing environment wins over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            let config = args.config()?;
            tracing_setup::init(&TracingConfig { debug: cli.debug })?;
            commands::serve::run_serve(config).await
        }
        Commands::ServeModel(args) => {
            let config = args.load_config()?;
            tracing_setup::init(&TracingConfig {
                debug: cli.debug || config.debug,
            })?;
            commands::serve_model::run_serve_model(config).await
        }
    }
}
