//! Core data types for the loaders.

mod dataset;
mod metric;
mod source;
mod state;
mod status;

pub use dataset::{CsvTable, Dataset, LoadResult, Record};
pub use metric::Metric;
pub use source::{Format, Source};
pub use state::LoadState;
pub use status::{StatusBlock, StatusKind, LOADING_TEXT};
