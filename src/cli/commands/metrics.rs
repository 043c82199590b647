//! List metrics command.

use anyhow::Result;
use vizload_view::Metric;

pub async fn run() -> Result<()> {
    println!("Available Metrics");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for (i, metric) in Metric::all().iter().enumerate() {
        println!("  {}. {:<10} {}", i + 1, metric.key(), metric.label());
    }

    println!();
    println!("Use --metric <name> to select a metric, or the number keys in the dashboard.");

    Ok(())
}
