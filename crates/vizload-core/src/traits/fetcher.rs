//! Fetch capability trait definition.

use crate::error::LoadError;
use crate::types::{CsvTable, Dataset, Format};
use async_trait::async_trait;

/// Trait for fetching and parsing remote documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a document and parse it as JSON.
    ///
    /// # Arguments
    /// * `address` - Locator of the resource
    ///
    /// # Returns
    /// The parsed value, or a fetch/parse/address error
    async fn fetch_json(&self, address: &str) -> Result<serde_json::Value, LoadError>;

    /// Fetch a document and parse it as CSV with a header row.
    ///
    /// # Arguments
    /// * `address` - Locator of the resource
    ///
    /// # Returns
    /// The rows in file order, keyed by header
    async fn fetch_csv(&self, address: &str) -> Result<CsvTable, LoadError>;

    /// Fetch a document in the given format.
    async fn fetch(&self, address: &str, format: Format) -> Result<Dataset, LoadError> {
        match format {
            Format::Json => self.fetch_json(address).await.map(Dataset::Json),
            Format::Csv => self.fetch_csv(address).await.map(Dataset::Csv),
        }
    }

    /// Get the fetcher name.
    fn name(&self) -> &str;
}
