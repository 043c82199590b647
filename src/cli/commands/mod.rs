//! CLI command implementations.

pub mod chart;
pub mod fetch;
pub mod metrics;
pub mod validate;
