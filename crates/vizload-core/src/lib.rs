//! Core types and traits for the data loaders.
//!
//! This crate provides the foundational building blocks including:
//! - Source and format descriptions (Source, Format)
//! - Parsed payloads (Dataset, CsvTable) and load results
//! - The loader lifecycle state (LoadState)
//! - Core traits for fetch capabilities and output surfaces

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ChartError, LoadError, VizError, VizResult};
pub use types::*;
pub use traits::*;
