//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use vizload_config::{AppConfig, ConfigError};

pub async fn run(config_path: &Path, loaded: Result<AppConfig, ConfigError>) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Sources: {}", config.sources.len());
    for source in &config.sources {
        match source.resolve_format() {
            Ok(format) => println!("  - {} ({})", source.address, format),
            Err(e) => println!("  - {} (warning: {})", source.address, e),
        }
    }
    println!("Chart: top {} by {}", config.chart.top_n, config.chart.metric);
    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
