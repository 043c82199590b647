//! Chart command implementation.

use anyhow::{Context, Result};
use tracing::info;
use vizload_config::{AppConfig, DEFAULT_COUNTRIES_URL};
use vizload_core::error::ChartError;
use vizload_core::types::{Dataset, Format};
use vizload_data::{http_fetcher, JsonLoader};
use vizload_view::{rank_countries, render_text, ConsoleSurface, Dashboard, DashboardState, Metric};

use crate::cli::ChartArgs;

pub async fn run(args: ChartArgs, config: &AppConfig) -> Result<()> {
    let metric = match &args.metric {
        Some(name) => name.parse::<Metric>()?,
        None => config.chart.metric()?,
    };
    let top_n = args.top.unwrap_or(config.chart.top_n);
    if top_n == 0 {
        anyhow::bail!("--top must be at least 1");
    }

    let address = args
        .source
        .clone()
        .or_else(|| {
            config
                .sources
                .iter()
                .find(|s| s.resolve_format() == Ok(Format::Json))
                .map(|s| s.address.clone())
        })
        .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string());

    info!(%address, %metric, top_n, "charting");

    // Load data
    let fetcher = http_fetcher(config.http.user_agent.as_deref())?;
    let mut loader = JsonLoader::new(ConsoleSurface::stderr("visualization"), address.as_str(), fetcher);
    let value = loader
        .load()
        .await
        .context("Failed to load country statistics")?;
    loader.clear();

    let dataset = Dataset::Json(value);

    if args.plain {
        let bars = rank_countries(&dataset, metric, top_n)?;
        print!("{}", render_text(&bars, metric, args.width));
        return Ok(());
    }

    let mut state = DashboardState::new(&dataset, &address, metric, top_n);
    if let Err(ChartError::EmptyResult) = state.bars {
        return Err(ChartError::EmptyResult.into());
    }

    // The dashboard polls the terminal synchronously
    let dashboard = Dashboard::new(config.chart.refresh_ms);
    tokio::task::block_in_place(|| dashboard.run(&dataset, &mut state))?;

    Ok(())
}
