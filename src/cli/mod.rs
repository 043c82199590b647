//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vizload_core::types::Source;

#[derive(Parser)]
#[command(name = "vizload")]
#[command(author, version, about = "Load JSON/CSV sources and chart COVID-19 statistics")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level, overrides the configured one
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chart the top countries for a metric
    Chart(ChartArgs),
    /// Load sources and print what was fetched
    Fetch(FetchArgs),
    /// List chartable metrics
    Metrics,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ChartArgs {
    /// Metric to chart (cases, deaths, recovered, active, critical, tests)
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Number of countries to show
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Country statistics URL (JSON), overrides the configured sources
    #[arg(long)]
    pub source: Option<String>,

    /// Print a text chart instead of opening the dashboard
    #[arg(long)]
    pub plain: bool,

    /// Bar width of the text chart
    #[arg(long, default_value = "40")]
    pub width: usize,
}

#[derive(clap::Args)]
pub struct FetchArgs {
    /// Sources as FORMAT=ADDRESS (e.g. csv=https://example.com/data.csv);
    /// defaults to the configured sources
    pub sources: Vec<Source>,

    /// Print the fetched payloads as JSON
    #[arg(long)]
    pub raw: bool,
}
