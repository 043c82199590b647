//! Plain-text bar chart.

use std::fmt::Write;

use vizload_core::types::Metric;

use crate::format::{chart_title, format_count};
use crate::ranking::CountryBar;

/// Render bars as lines of `name  ████  value`, scaled to `width` cells.
pub fn render_text(bars: &[CountryBar], metric: Metric, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart_title(metric, bars.len()));
    let _ = writeln!(out, "{}", "═".repeat(width + 30));

    let name_width = bars
        .iter()
        .map(|b| b.location.chars().count())
        .max()
        .unwrap_or(0);
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    for bar in bars {
        let cells = if max > 0.0 {
            ((bar.value / max) * width as f64).round().max(1.0) as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<width$}  {}",
            bar.location,
            "█".repeat(cells),
            format_count(bar.value),
        );
    }

    out
}
