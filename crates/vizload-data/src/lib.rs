//! JSON, CSV and multi-source data loaders.

mod base;
mod codec;
mod http;
mod loader;
mod multi;
mod single;

#[cfg(test)]
mod mock;

pub use base::LoaderBase;
pub use codec::{parse_csv, parse_json};
pub use http::HttpFetcher;
pub use loader::DataLoader;
pub use multi::MultiLoader;
pub use single::{CsvLoader, JsonLoader};

use std::sync::Arc;
use vizload_core::error::LoadError;
use vizload_core::traits::Fetcher;

/// Build the shared HTTP fetcher, optionally with a custom user agent.
pub fn http_fetcher(user_agent: Option<&str>) -> Result<Arc<dyn Fetcher>, LoadError> {
    let fetcher = match user_agent {
        Some(agent) => HttpFetcher::with_user_agent(agent)?,
        None => HttpFetcher::new()?,
    };
    Ok(Arc::new(fetcher))
}
