//! Source and format definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LoadError;

/// Payload format of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Arbitrary structured JSON value
    #[default]
    Json,
    /// Comma-separated records with a header row
    Csv,
}

impl Format {
    /// Get all supported formats.
    pub fn all() -> &'static [Format] {
        &[Format::Json, Format::Csv]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoadError;

    /// Case-insensitive; anything else is reported with the string as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            _ => Err(LoadError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// One `(address, format)` pair to fetch.
///
/// The format is kept exactly as supplied so that an unsupported value can be
/// reported verbatim when the source is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Locator of the resource
    #[serde(alias = "url")]
    pub address: String,
    /// Declared format, e.g. "json" or "csv"
    pub format: String,
}

impl Source {
    pub fn new(address: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            format: format.into(),
        }
    }

    pub fn json(address: impl Into<String>) -> Self {
        Self::new(address, Format::Json.as_str())
    }

    pub fn csv(address: impl Into<String>) -> Self {
        Self::new(address, Format::Csv.as_str())
    }

    /// Resolve the declared format.
    pub fn resolve_format(&self) -> Result<Format, LoadError> {
        self.format.parse()
    }
}

impl FromStr for Source {
    type Err = String;

    /// Parse `FORMAT=ADDRESS`, e.g. `csv=https://example.com/data.csv`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((format, address)) if !format.is_empty() && !address.is_empty() => {
                Ok(Source::new(address, format))
            }
            _ => Err(format!("expected FORMAT=ADDRESS, got '{}'", s)),
        }
    }
}
