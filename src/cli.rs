//! Command-line interface definitions for Lenta Digest.
//!
//! All arguments can be provided via command-line flags or environment variables.

use crate::engine::dates::parse_target_date;
use crate::models::Category;
use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the Lenta Digest application.
///
/// # Examples
///
/// ```sh
/// # Everything published on 22 February 2020
/// lenta_digest --date 22.02.2020
///
/// # Only articles, written to a custom path
/// lenta_digest -d 2020-02-22 -c articles -o ./out/articles.json
///
/// # Work offline from a saved copy of the page
/// lenta_digest -d 2020-02-22 --input ./front_page.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Publication date to keep (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(short, long, env = "LENTA_DATE", value_parser = parse_target_date)]
    pub date: NaiveDate,

    /// Only keep records of this category
    #[arg(short, long, env = "LENTA_CATEGORY", value_enum)]
    pub category: Option<Category>,

    /// Path of the JSON file to write
    #[arg(short, long, env = "LENTA_OUTPUT", default_value = "news.json")]
    pub output: String,

    /// Optional path to a config.yaml file
    #[arg(long, env = "LENTA_CONFIG")]
    pub config: Option<String>,

    /// Read the front page from this file instead of fetching it
    #[arg(long)]
    pub input: Option<String>,

    /// Save the fetched front page markup to this file
    #[arg(long, conflicts_with = "input")]
    pub save_html: Option<String>,
}
