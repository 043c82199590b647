//! Ranking, terminal chart and logging for loaded datasets.

mod console;
mod dashboard;
mod format;
mod logging;
mod ranking;
mod text;

pub use console::ConsoleSurface;
pub use dashboard::{Dashboard, DashboardState};
pub use format::{chart_title, format_count};
pub use logging::setup_logging;
pub use vizload_core::types::Metric;
pub use ranking::{latest_update, rank_countries, CountryBar};
pub use text::render_text;
