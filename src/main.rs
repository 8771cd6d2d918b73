//! # Lenta Digest
//!
//! Extracts dated headlines from the lenta.ru front page and writes them to a
//! JSON file.
//!
//! ## Usage
//!
//! ```sh
//! lenta_digest --date 22.02.2020 --category articles --output news.json
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Download the front page (or read a saved copy)
//! 2. **Classification**: Decide which of six layouts each headline item uses
//! 3. **Extraction**: Pull title, link and date with the layout's rule
//! 4. **Assembly**: Filter by date and category, resolve links, drop duplicates
//! 5. **Output**: Write the records as JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod engine;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use outputs::json;
use pipeline::RecordFilter;
use utils::ensure_parent_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("lenta_digest starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = config::load_config(args.config.as_deref()).await?;

    // ---- Obtain the front page ----
    let html = match &args.input {
        Some(path) => {
            info!(%path, "Reading front page from file");
            tokio::fs::read_to_string(path).await?
        }
        None => scrapers::lenta::fetch_front_page(&config).await?,
    };

    if let Some(path) = &args.save_html {
        ensure_parent_dir(path).await?;
        match tokio::fs::write(path, &html).await {
            Ok(()) => info!(%path, "Saved front page markup"),
            Err(e) => error!(%path, error = %e, "Failed to save front page markup"),
        }
    }

    // ---- Classify, extract, filter ----
    let record_filter = RecordFilter {
        date: args.date,
        category: args.category,
    };
    let harvest = scrapers::lenta::collect_items(&html, &record_filter, &config)?;

    // ---- Output ----
    if let Err(e) = json::write_records(&harvest, &args.output).await {
        error!(path = %args.output, error = %e, "Failed to write JSON output");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        records = harvest.records.len(),
        skipped = harvest.skipped.total(),
        unclassified = harvest.skipped.unclassified,
        failed = harvest.skipped.failed,
        date = %record_filter.date,
        "Execution complete"
    );

    Ok(())
}
