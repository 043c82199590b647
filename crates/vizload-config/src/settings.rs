//! Configuration structures.

use serde::{Deserialize, Serialize};
use vizload_core::error::{VizError, VizResult};
use vizload_core::types::Source;
use vizload_core::types::Metric;

/// Country statistics endpoint charted by default.
pub const DEFAULT_COUNTRIES_URL: &str = "https://disease.sh/v3/covid-19/countries";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub chart: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            logging: LoggingConfig::default(),
            http: HttpSettings::default(),
            sources: default_sources(),
            chart: ChartSettings::default(),
        }
    }
}

fn default_sources() -> Vec<Source> {
    vec![Source::json(DEFAULT_COUNTRIES_URL)]
}

impl AppConfig {
    /// Check values that deserialize fine but cannot be used.
    ///
    /// Source formats are left alone; an unsupported one is reported when
    /// the sources are loaded.
    pub fn validate(&self) -> VizResult<()> {
        if self.chart.top_n == 0 {
            return Err(VizError::Config("chart.top_n must be at least 1".into()));
        }
        self.chart.metric()?;
        if self.sources.is_empty() {
            return Err(VizError::Config("at least one source is required".into()));
        }
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "vizload".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpSettings {
    /// Overrides the built-in user agent
    pub user_agent: Option<String>,
}

/// Chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub metric: String,
    pub top_n: usize,
    pub refresh_ms: u64,
}

impl ChartSettings {
    pub fn metric(&self) -> VizResult<Metric> {
        Ok(self.metric.parse::<Metric>()?)
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            metric: Metric::default().key().to_string(),
            top_n: 10,
            refresh_ms: 250,
        }
    }
}
