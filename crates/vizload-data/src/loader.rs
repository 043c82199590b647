//! Closed set of loader variants.

use std::sync::Arc;
use vizload_core::error::LoadError;
use vizload_core::traits::{Fetcher, Surface};
use vizload_core::types::{Dataset, Format, LoadResult, LoadState, Source};

use crate::multi::MultiLoader;
use crate::single::{CsvLoader, JsonLoader};

/// Any of the three loaders behind one `load` operation.
pub enum DataLoader<S> {
    Json(JsonLoader<S>),
    Csv(CsvLoader<S>),
    Multi(MultiLoader<S>),
}

impl<S: Surface> DataLoader<S> {
    /// Pick a loader for the given sources.
    ///
    /// One source with a recognized format gets the matching single loader.
    /// Everything else, including an unrecognized format, goes to a
    /// `MultiLoader` so that the format error surfaces on `load`.
    pub fn from_sources(surface: S, mut sources: Vec<Source>, fetcher: Arc<dyn Fetcher>) -> Self {
        if sources.len() == 1 {
            if let Ok(format) = sources[0].resolve_format() {
                let source = sources.remove(0);
                return match format {
                    Format::Json => DataLoader::Json(JsonLoader::new(surface, source.address, fetcher)),
                    Format::Csv => DataLoader::Csv(CsvLoader::new(surface, source.address, fetcher)),
                };
            }
        }
        DataLoader::Multi(MultiLoader::new(surface, sources, fetcher))
    }

    pub async fn load(&mut self) -> Result<LoadResult, LoadError> {
        match self {
            DataLoader::Json(loader) => loader
                .load()
                .await
                .map(|value| LoadResult::Single(Dataset::Json(value))),
            DataLoader::Csv(loader) => loader
                .load()
                .await
                .map(|table| LoadResult::Single(Dataset::Csv(table))),
            DataLoader::Multi(loader) => loader.load().await.map(LoadResult::Multi),
        }
    }

    pub fn state(&self) -> &LoadState {
        match self {
            DataLoader::Json(loader) => loader.state(),
            DataLoader::Csv(loader) => loader.state(),
            DataLoader::Multi(loader) => loader.state(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            DataLoader::Json(loader) => loader.clear(),
            DataLoader::Csv(loader) => loader.clear(),
            DataLoader::Multi(loader) => loader.clear(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            DataLoader::Json(loader) => loader.reset(),
            DataLoader::Csv(loader) => loader.reset(),
            DataLoader::Multi(loader) => loader.reset(),
        }
    }

    pub fn surface(&self) -> &S {
        match self {
            DataLoader::Json(loader) => loader.surface(),
            DataLoader::Csv(loader) => loader.surface(),
            DataLoader::Multi(loader) => loader.surface(),
        }
    }

    /// Short variant name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DataLoader::Json(_) => "json",
            DataLoader::Csv(_) => "csv",
            DataLoader::Multi(_) => "multi",
        }
    }
}

impl<S: Surface> From<JsonLoader<S>> for DataLoader<S> {
    fn from(loader: JsonLoader<S>) -> Self {
        DataLoader::Json(loader)
    }
}

impl<S: Surface> From<CsvLoader<S>> for DataLoader<S> {
    fn from(loader: CsvLoader<S>) -> Self {
        DataLoader::Csv(loader)
    }
}

impl<S: Surface> From<MultiLoader<S>> for DataLoader<S> {
    fn from(loader: MultiLoader<S>) -> Self {
        DataLoader::Multi(loader)
    }
}
