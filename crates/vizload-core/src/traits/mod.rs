//! Core traits for the loaders.

mod fetcher;
mod surface;

pub use fetcher::Fetcher;
pub use surface::{MemorySurface, Surface};
