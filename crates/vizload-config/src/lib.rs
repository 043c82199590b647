//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, ChartSettings, HttpSettings, LoggingConfig, DEFAULT_COUNTRIES_URL,
};

pub use config::ConfigError;

use config::{Config, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("VIZLOAD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
