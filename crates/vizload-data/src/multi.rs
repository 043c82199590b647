//! Multi-source loader.

use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};
use vizload_core::error::LoadError;
use vizload_core::traits::{Fetcher, Surface};
use vizload_core::types::{Dataset, Format, LoadResult, LoadState, Source};

use crate::base::LoaderBase;

/// Loader for a fixed list of JSON and CSV sources fetched concurrently.
pub struct MultiLoader<S> {
    base: LoaderBase<S>,
    sources: Vec<Source>,
    fetcher: Arc<dyn Fetcher>,
}

impl<S: Surface> MultiLoader<S> {
    pub fn new(surface: S, sources: Vec<Source>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            base: LoaderBase::new(surface),
            sources,
            fetcher,
        }
    }

    /// Fetch every source and return the payloads in source order.
    ///
    /// All formats are checked before anything is fetched. Every dispatched
    /// fetch runs to completion; the first one to fail decides the error and
    /// the payloads of the others are dropped.
    pub async fn load(&mut self) -> Result<Vec<Dataset>, LoadError> {
        self.base.begin_load();
        info!(sources = self.sources.len(), fetcher = self.fetcher.name(), "loading sources");

        let outcome = match self.resolve_formats() {
            Ok(formats) => self.fetch_all(&formats).await,
            Err(err) => Err(err),
        };

        self.base
            .finish(outcome, |d| LoadResult::Multi(d.clone()))
    }

    fn resolve_formats(&self) -> Result<Vec<Format>, LoadError> {
        self.sources.iter().map(Source::resolve_format).collect()
    }

    async fn fetch_all(&self, formats: &[Format]) -> Result<Vec<Dataset>, LoadError> {
        let mut pending: FuturesUnordered<_> = self
            .sources
            .iter()
            .zip(formats)
            .enumerate()
            .map(|(index, (source, &format))| {
                let fetcher = Arc::clone(&self.fetcher);
                async move {
                    let outcome = fetcher.fetch(&source.address, format).await;
                    (index, outcome)
                }
            })
            .collect();

        let mut slots: Vec<Option<Dataset>> = vec![None; self.sources.len()];
        let mut first_error: Option<LoadError> = None;

        while let Some((index, outcome)) = pending.next().await {
            match outcome {
                Ok(dataset) => {
                    debug!(index, address = %self.sources[index].address, "source loaded");
                    slots[index] = Some(dataset);
                }
                Err(err) => {
                    debug!(index, error = %err, "source failed");
                    first_error.get_or_insert(err);
                }
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        Ok(slots.into_iter().flatten().collect())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Payloads held by the `Loaded` state, if that is the current state.
    pub fn data(&self) -> Option<&[Dataset]> {
        self.base.state().result().map(LoadResult::datasets)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{sample_table, Event, ScriptedFetcher};
    use serde_json::json;
    use std::time::Duration;
    use vizload_core::traits::MemorySurface;
    use vizload_core::types::StatusKind;

    const A1: &str = "https://example.com/a1.json";
    const A2: &str = "https://example.com/a2.csv";

    #[tokio::test]
    async fn test_results_follow_source_order() {
        let v1 = Dataset::Json(json!({"source": 1}));
        let v2 = Dataset::Csv(sample_table());
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply(A1, Duration::from_millis(40), Ok(v1.clone()))
                .reply(A2, Duration::from_millis(5), Ok(v2.clone())),
        );
        let sources = vec![Source::json(A1), Source::csv(A2)];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher.clone());

        let datasets = loader.load().await.unwrap();

        assert_eq!(datasets, vec![v1.clone(), v2.clone()]);
        assert_eq!(fetcher.completed(), vec![A2.to_string(), A1.to_string()]);
        assert_eq!(
            loader.state(),
            &LoadState::Loaded(LoadResult::Multi(vec![v1, v2]))
        );
    }

    #[tokio::test]
    async fn test_fetches_are_dispatched_together() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply(A1, Duration::from_millis(30), Ok(Dataset::Json(json!(1))))
                .reply(A2, Duration::from_millis(30), Ok(Dataset::Csv(sample_table()))),
        );
        let sources = vec![Source::json(A1), Source::csv(A2)];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher.clone());

        loader.load().await.unwrap();

        let events = fetcher.events();
        assert_eq!(events.len(), 4);
        assert!(events[..2].iter().all(|e| matches!(e, Event::Started(_))));
        assert!(events[2..].iter().all(|e| matches!(e, Event::Completed(_))));
    }

    #[tokio::test]
    async fn test_one_failure_fails_the_load() {
        let v1 = Dataset::Json(json!({"source": 1}));
        let err = LoadError::fetch(A2, "HTTP 404 Not Found");
        let fetcher = Arc::new(ScriptedFetcher::new().ok(A1, v1).fail(A2, err.clone()));
        let sources = vec![Source::json(A1), Source::csv(A2)];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher.clone());

        let returned = loader.load().await.unwrap_err();

        assert_eq!(returned, err);
        assert_eq!(loader.state(), &LoadState::Failed(err));
        assert!(loader.data().is_none());
        assert_eq!(fetcher.completed().len(), 2);
        assert_eq!(loader.surface().blocks()[0].kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_first_failure_to_complete_wins() {
        let slow = LoadError::fetch(A1, "connection reset");
        let fast = LoadError::parse(A2, "unequal lengths");
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .reply(A1, Duration::from_millis(30), Err(slow))
                .reply(A2, Duration::ZERO, Err(fast.clone())),
        );
        let sources = vec![Source::json(A1), Source::csv(A2)];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher);

        assert_eq!(loader.load().await.unwrap_err(), fast);
    }

    #[tokio::test]
    async fn test_unsupported_format_fails_before_any_fetch() {
        let fetcher = Arc::new(ScriptedFetcher::new().ok(A1, Dataset::Json(json!(1))));
        let sources = vec![Source::json(A1), Source::new("https://example.com/a.xml", "xml")];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher.clone());

        let err = loader.load().await.unwrap_err();

        assert_eq!(err, LoadError::UnsupportedFormat("xml".to_string()));
        assert!(err.to_string().contains("xml"));
        assert!(fetcher.started().is_empty());
        assert!(loader.state().is_failed());
        assert!(loader.surface().blocks()[0].text.contains("Unsupported data type: xml"));
    }

    #[tokio::test]
    async fn test_format_names_are_case_insensitive() {
        let fetcher = Arc::new(
            ScriptedFetcher::new()
                .ok(A1, Dataset::Json(json!(1)))
                .ok(A2, Dataset::Csv(sample_table())),
        );
        let sources = vec![Source::new(A1, "JSON"), Source::new(A2, "Csv")];
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), sources, fetcher);

        assert_eq!(loader.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_no_sources_loads_empty() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), Vec::new(), fetcher);

        assert!(loader.load().await.unwrap().is_empty());
        assert_eq!(loader.state(), &LoadState::Loaded(LoadResult::Multi(Vec::new())));
    }

    #[tokio::test]
    async fn test_reload_after_failure() {
        let fetcher = Arc::new(ScriptedFetcher::new().ok(A1, Dataset::Json(json!([1, 2]))));
        let mut loader = MultiLoader::new(
            MemorySurface::new("viz"),
            vec![Source::json(A1), Source::csv(A2)],
            fetcher,
        );
        assert!(loader.load().await.is_err());

        loader.sources.truncate(1);
        let datasets = loader.load().await.unwrap();
        assert_eq!(datasets, vec![Dataset::Json(json!([1, 2]))]);
        assert!(loader.state().is_loaded());
    }

    #[tokio::test]
    async fn test_failed_reload_drops_previous_payloads() {
        let fetcher = Arc::new(ScriptedFetcher::new().ok(A1, Dataset::Json(json!([1]))));
        let mut loader = MultiLoader::new(MemorySurface::new("viz"), vec![Source::json(A1)], fetcher);
        loader.load().await.unwrap();
        assert_eq!(loader.data(), Some(&[Dataset::Json(json!([1]))][..]));

        loader.sources.push(Source::csv(A2));
        let err = loader.load().await.unwrap_err();

        assert_eq!(loader.state(), &LoadState::Failed(err));
        assert!(loader.data().is_none());
    }
}
