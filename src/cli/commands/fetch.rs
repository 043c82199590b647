//! Fetch command implementation.

use anyhow::{Context, Result};
use tracing::info;
use vizload_config::AppConfig;
use vizload_core::types::Dataset;
use vizload_data::{http_fetcher, DataLoader};
use vizload_view::ConsoleSurface;

use crate::cli::FetchArgs;

pub async fn run(args: FetchArgs, config: &AppConfig) -> Result<()> {
    let sources = if args.sources.is_empty() {
        config.sources.clone()
    } else {
        args.sources
    };
    let addresses: Vec<String> = sources.iter().map(|s| s.address.clone()).collect();

    let fetcher = http_fetcher(config.http.user_agent.as_deref())?;
    let mut loader = DataLoader::from_sources(ConsoleSurface::stderr("fetch"), sources, fetcher);
    info!(kind = loader.kind(), sources = addresses.len(), "fetching");

    let result = loader.load().await.context("Failed to load sources")?;
    loader.clear();

    if args.raw {
        println!("{}", serde_json::to_string_pretty(result.datasets())?);
        return Ok(());
    }

    println!("Loaded {} source(s)", result.datasets().len());
    println!("═══════════════════════════════════════════════════════════");

    for (i, (dataset, address)) in result.datasets().iter().zip(&addresses).enumerate() {
        println!();
        println!("  [{}] {} ({})", i, address, dataset.format());
        println!("  ───────────────────────────────────────────────────────");
        match dataset {
            Dataset::Csv(table) => {
                println!("  Rows:    {}", table.len());
                println!("  Columns: {}", table.columns.join(", "));
            }
            Dataset::Json(value) => match dataset.record_count() {
                Some(count) => println!("  Records: {}", count),
                None => println!("  Value:   {}", json_kind(value)),
            },
        }
    }

    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
