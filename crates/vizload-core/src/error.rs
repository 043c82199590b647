//! Error types for the loaders and their consumers.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loader errors.
///
/// A failed load keeps a copy of its error in the loader state and hands the
/// same value back to the caller, so this type is `Clone` and carries only
/// owned strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Unsupported data type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to fetch {address}: {reason}")]
    Fetch { address: String, reason: String },

    #[error("Failed to parse {address}: {reason}")]
    Parse { address: String, reason: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl LoadError {
    pub fn fetch(address: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(address: &str, reason: impl ToString) -> Self {
        Self::Parse {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while turning a loaded dataset into a chart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("No data received from API")]
    EmptyResult,

    #[error("No valid data for selected metric: {metric}")]
    NoValidData { metric: String },

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

/// Result type alias for top-level operations.
pub type VizResult<T> = Result<T, VizError>;
