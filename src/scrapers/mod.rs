//! Front page sources.
//!
//! Each scraper follows the same two-phase pattern:
//!
//! 1. **Fetching**: Download the raw front page markup
//! 2. **Collecting**: Select the headline items and hand them to the
//!    [`pipeline`](crate::pipeline)
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Lenta.ru | [`lenta`] | HTML scraping | Six item layouts, dates taken from URLs |

pub mod lenta;
