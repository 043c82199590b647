//! Number and title formatting.

use vizload_core::types::Metric;

/// Format a count rounded to a whole number with thousands separators.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Chart heading for a metric and list size.
pub fn chart_title(metric: Metric, top_n: usize) -> String {
    format!("COVID-19 {} by Country (Top {})", metric.label(), top_n)
}
