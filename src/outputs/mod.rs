//! Output generation for extracted records.
//!
//! # Submodules
//!
//! - [`json`]: Writes the harvested records to a JSON file
//!
//! # Output Structure
//!
//! ```text
//! news.json
//! [
//!   { "date": "2020-02-22", "title": "...", "link": "https://lenta.ru/...", "category": "news" },
//!   ...
//! ]
//! ```

pub mod json;
