//! Single-source loaders.

use std::sync::Arc;
use tracing::info;
use vizload_core::error::LoadError;
use vizload_core::traits::{Fetcher, Surface};
use vizload_core::types::{CsvTable, Dataset, LoadResult, LoadState};

use crate::base::LoaderBase;

/// Loader for one JSON resource.
pub struct JsonLoader<S> {
    base: LoaderBase<S>,
    address: String,
    fetcher: Arc<dyn Fetcher>,
}

impl<S: Surface> JsonLoader<S> {
    pub fn new(surface: S, address: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            base: LoaderBase::new(surface),
            address: address.into(),
            fetcher,
        }
    }

    /// Fetch the resource once and record the outcome.
    pub async fn load(&mut self) -> Result<serde_json::Value, LoadError> {
        self.base.begin_load();
        info!(address = %self.address, fetcher = self.fetcher.name(), "loading JSON");

        let outcome = self.fetcher.fetch_json(&self.address).await;
        self.base
            .finish(outcome, |v| LoadResult::Single(Dataset::Json(v.clone())))
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Payload held by the `Loaded` state, if that is the current state.
    pub fn data(&self) -> Option<&serde_json::Value> {
        single_dataset(self.base.state()).and_then(Dataset::as_json)
    }

    pub fn state(&self) -> &LoadState {
        self.base.state()
    }

    pub fn clear(&mut self) {
        self.base.clear();
    }

    pub fn reset(&mut self) {
        self.base.reset();
    }

    pub fn surface(&self) -> &S {
        self.base.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.base.surface_mut()
    }
}

/// Loader for one CSV resource.
pub struct CsvLoader<S> {
    base: LoaderBase<S>,
    address: String,
    fetcher: Arc<dyn Fetcher>,
}

impl<S: Surface> CsvLoader<S> {
    pub fn new(surface: S, address: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            base: LoaderBase::new(surface),
            address: address.into(),
            fetcher,
        }
    }

    /// Fetch the resource once and record the outcome.
    pub async fn load(&mut self) -> Result<CsvTable, LoadError> {
        self.base.begin_load();
        info!(address = %self.address, fetcher = self.fetcher.name(), "loading CSV");

        let outcome = self.fetcher.fetch_csv(&self.address).await;
        self.base
            .finish(outcome, |t| LoadResult::Single(Dataset::Csv(t.clone())))
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Rows held by the `Loaded` state, if that is the current state.
    pub fn data(&self) -> Option<&CsvTable> {
        single_dataset(self.base.state()).and_then(Dataset::as_csv)
    }

    pub fn state(&self) -> &LoadState {
        self.base.state()
    }

    pub fn clear(&mut self) {
        self.base.clear();
    }

    pub fn reset(&mut self) {
        self.base.reset();
    }

    pub fn surface(&self) -> &S {
        self.base.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.base.surface_mut()
    }
}

fn single_dataset(state: &LoadState) -> Option<&Dataset> {
    match state.result()? {
        LoadResult::Single(dataset) => Some(dataset),
        LoadResult::Multi(_) => None,
    }
}
