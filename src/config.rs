//! Scraper configuration.
//!
//! Defaults target the live lenta.ru front page. An optional YAML file can
//! override any subset of the fields:
//!
//! ```yaml
//! origin: https://lenta.ru
//! user_agent: "Mozilla/5.0 ..."
//! item_selector: "div.first-item, div.item, div.b-tabloid__topic"
//! ```

use serde::Deserialize;
use std::error::Error;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_ORIGIN: &str = "https://lenta.ru";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/78.0.3904.108 YaBrowser/19.12.3.320 Yowser/2.5 Safari/537.36";

/// Selects every element that may hold a headline, in document order.
pub const DEFAULT_ITEM_SELECTOR: &str = "div.first-item, div.item, div.b-tabloid__topic";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Site origin; also the base for resolving relative links.
    pub origin: String,
    /// `User-Agent` header sent with the front page request.
    pub user_agent: String,
    /// CSS selector for candidate items.
    pub item_selector: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Parse the configured origin.
    pub fn origin_url(&self) -> Result<Url, Box<dyn Error>> {
        Ok(Url::parse(&self.origin)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Load configuration from `path`, or fall back to the defaults when no path
/// was given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<ScraperConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ScraperConfig::default());
    };
    let yaml = tokio::fs::read_to_string(path).await?;
    let config = ScraperConfig::from_yaml(&yaml)?;
    config.origin_url()?;
    info!(%path, origin = %config.origin, "Loaded configuration");
    Ok(config)
}
