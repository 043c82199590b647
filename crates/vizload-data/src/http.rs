//! HTTP fetcher backed by reqwest.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use tracing::debug;
use vizload_core::error::LoadError;
use vizload_core::traits::Fetcher;
use vizload_core::types::CsvTable;

use crate::codec::{parse_csv, parse_json};

const DEFAULT_USER_AGENT: &str = concat!("vizload/", env!("CARGO_PKG_VERSION"));

/// Fetcher for `http`, `https` and `file` addresses.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default user agent.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a fetcher sending the given user agent.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, LoadError> {
        let mut headers = header::HeaderMap::new();
        let value = header::HeaderValue::from_str(user_agent)
            .map_err(|e| LoadError::fetch("client", format!("invalid user agent: {}", e)))?;
        headers.insert(header::USER_AGENT, value);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| LoadError::fetch("client", e))?;

        Ok(Self { client })
    }

    /// Fetch the raw body of a resource.
    async fn get_text(&self, address: &str) -> Result<String, LoadError> {
        let url = Url::parse(address)
            .map_err(|e| LoadError::InvalidAddress(format!("{}: {}", address, e)))?;

        match url.scheme() {
            "http" | "https" => {
                debug!(%url, "GET");
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| LoadError::fetch(address, e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::fetch(address, format!("HTTP {}", status)));
                }

                response
                    .text()
                    .await
                    .map_err(|e| LoadError::fetch(address, e))
            }
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| LoadError::InvalidAddress(address.to_string()))?;
                debug!(path = %path.display(), "reading file");
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| LoadError::fetch(address, e))
            }
            scheme => Err(LoadError::InvalidAddress(format!(
                "{}: unsupported scheme '{}'",
                address, scheme
            ))),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_json(&self, address: &str) -> Result<serde_json::Value, LoadError> {
        let body = self.get_text(address).await?;
        parse_json(address, &body)
    }

    async fn fetch_csv(&self, address: &str) -> Result<CsvTable, LoadError> {
        let body = self.get_text(address).await?;
        parse_csv(address, &body)
    }

    fn name(&self) -> &str {
        "HTTP Fetcher"
    }
}
