//! Loader lifecycle state.

use std::fmt;

use super::LoadResult;
use crate::error::LoadError;

/// Lifecycle state of a loader. Exactly one holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet, or reset
    #[default]
    Idle,
    /// A load is in progress
    Loading,
    /// The last load succeeded
    Loaded(LoadResult),
    /// The last load failed
    Failed(LoadError),
}

impl LoadState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// The stored result, if loaded.
    pub fn result(&self) -> Option<&LoadResult> {
        match self {
            LoadState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// The stored error, if failed.
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Loaded(_) => write!(f, "loaded"),
            LoadState::Failed(_) => write!(f, "failed"),
        }
    }
}
