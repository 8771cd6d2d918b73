//! lenta.ru front page scraper.
//!
//! The front page lists headlines in several blocks (top story, main news
//! feed, longreads, tabloid strip). Every block item is a `div` whose class
//! list tells us its layout; the engine takes it from there.

use crate::config::ScraperConfig;
use crate::models::Harvest;
use crate::pipeline::{RecordFilter, harvest};
use crate::utils::truncate_for_log;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

/// Download the front page markup.
///
/// # Returns
///
/// The raw HTML body, or an error if the request fails or the server answers
/// with a non-success status.
#[instrument(level = "info", skip_all, fields(origin = %config.origin))]
pub async fn fetch_front_page(config: &ScraperConfig) -> Result<String, Box<dyn Error>> {
    let client = reqwest::Client::new();
    let html = client
        .get(&config.origin)
        .header(USER_AGENT, &config.user_agent)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    info!(bytes = html.len(), "Fetched front page");
    debug!(preview = %truncate_for_log(&html, 200), "Front page markup");
    Ok(html)
}

/// Parse `html`, pick out every headline item and run the pipeline on them.
///
/// # Errors
///
/// Fails only when the configured selector or origin is invalid. Problems
/// with individual items are counted in the returned [`Harvest`].
#[instrument(level = "info", skip_all, fields(date = %filter.date, category = ?filter.category))]
pub fn collect_items(
    html: &str,
    filter: &RecordFilter,
    config: &ScraperConfig,
) -> Result<Harvest, Box<dyn Error>> {
    let origin = config.origin_url()?;
    let item_selector = Selector::parse(&config.item_selector)
        .map_err(|e| format!("invalid item selector `{}`: {e}", config.item_selector))?;

    let document = Html::parse_document(html);
    let items: Vec<_> = document.select(&item_selector).collect();
    debug!(count = items.len(), "Selected candidate items");

    Ok(harvest(items, filter, &origin))
}
