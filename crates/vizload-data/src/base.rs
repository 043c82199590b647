//! Shared loader lifecycle.

use tracing::{debug, warn};
use vizload_core::error::LoadError;
use vizload_core::traits::Surface;
use vizload_core::types::{LoadResult, LoadState, StatusBlock};

/// State and surface shared by every loader variant.
///
/// Variants only fetch; the status transitions and everything written to the
/// surface go through here.
#[derive(Debug)]
pub struct LoaderBase<S> {
    surface: S,
    state: LoadState,
}

impl<S: Surface> LoaderBase<S> {
    /// Wrap a surface. Nothing is written until the first load.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: LoadState::Idle,
        }
    }

    /// Enter `Loading` and replace the surface content with the loading block.
    pub fn begin_load(&mut self) {
        debug!(surface = self.surface.id(), "load started");
        self.state = LoadState::Loading;
        self.surface.clear();
        self.surface.append(StatusBlock::loading());
    }

    /// Enter `Failed` and replace the surface content with the error block.
    pub fn report_error(&mut self, err: &LoadError) {
        warn!(surface = self.surface.id(), error = %err, "load failed");
        self.state = LoadState::Failed(err.clone());
        self.surface.clear();
        self.surface.append(StatusBlock::error(err));
    }

    /// Empty the surface. The state is left as is.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Return to `Idle`. The surface is left as is.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
    }

    /// Record the outcome of a fetch and hand it back.
    ///
    /// `snapshot` builds the stored result from a successful payload.
    pub fn finish<T>(
        &mut self,
        outcome: Result<T, LoadError>,
        snapshot: impl FnOnce(&T) -> LoadResult,
    ) -> Result<T, LoadError> {
        match outcome {
            Ok(payload) => {
                debug!(surface = self.surface.id(), "load finished");
                self.state = LoadState::Loaded(snapshot(&payload));
                Ok(payload)
            }
            Err(err) => {
                self.report_error(&err);
                Err(err)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
