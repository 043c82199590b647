//! Data loader CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use vizload_config::{load_config, AppConfig, ConfigError};
use vizload_view::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken config still gets default logging so validate-config can report it
    let loaded = load_config(&cli.config);
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();

    // Setup logging
    let log_level = match cli.log_level {
        Some(cli::LogLevel::Trace) => "trace",
        Some(cli::LogLevel::Debug) => "debug",
        Some(cli::LogLevel::Info) => "info",
        Some(cli::LogLevel::Warn) => "warn",
        Some(cli::LogLevel::Error) => "error",
        None => logging.level.as_str(),
    };
    let json_logs = cli.json_logs || logging.format == "json";
    let _log_guard = setup_logging(log_level, json_logs, logging.file.as_deref().map(Path::new));

    // Execute command
    match cli.command {
        Commands::Chart(args) => {
            let config = require_config(loaded, &cli.config)?;
            cli::commands::chart::run(args, &config).await
        }
        Commands::Fetch(args) => {
            let config = require_config(loaded, &cli.config)?;
            cli::commands::fetch::run(args, &config).await
        }
        Commands::Metrics => cli::commands::metrics::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, loaded).await,
    }
}

fn require_config(
    loaded: Result<AppConfig, ConfigError>,
    path: &Path,
) -> Result<AppConfig> {
    loaded.with_context(|| format!("Failed to load configuration from {:?}", path))
}
