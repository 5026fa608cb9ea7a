//! Chartify Candles - CSV OHLC Candlestick Chart Viewer
//!
//! Reads a CSV of OHLC prices and serves an interactive candlestick chart to
//! the browser from a local web server, with a toggle for the range slider.

mod charts;
mod config;
mod data;
mod server;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use charts::ChartRenderer;
use clap::Parser;
use config::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(csv_path) = cli.csv_path.clone() else {
        println!("Error: Please provide a CSV file path as the first argument");
        println!("Usage: chartify_candles path/to/your/file.csv");
        std::process::exit(1);
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chartify_candles=info")),
        )
        .with_target(true)
        .init();

    let renderer = ChartRenderer::new(csv_path, cli.columns());
    tracing::info!(columns = ?renderer.columns().required(), "Expecting OHLC columns");

    let addr = cli.addr();
    server::serve(addr, renderer, cli.open)
        .await
        .with_context(|| format!("chart viewer on {addr} failed"))?;

    Ok(())
}
