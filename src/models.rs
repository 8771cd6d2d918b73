//! Data models for extracted headlines.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsRecord`]: One headline extracted from a front page item
//! - [`Category`]: Whether a record points at a news item or a longer article
//! - [`Harvest`]: The outcome of processing one page worth of items
//!
//! Records are plain values. They are never mutated once built; link
//! resolution during assembly builds a new record.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a record links to.
///
/// Serialized in lowercase (`"news"`, `"articles"`) to match the category
/// names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Short news items from the news stream.
    News,
    /// Longreads and articles.
    Articles,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Articles => "articles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single headline extracted from the front page.
///
/// Two records are duplicates iff all four fields are equal, which is what
/// the derived `PartialEq`/`Hash` give us.
///
/// # Fields
///
/// * `date` - Publication date recovered from the link or image path
/// * `title` - Headline text with trailing whitespace removed
/// * `link` - Absolute or site-relative URL of the story
/// * `category` - News or articles, fixed by the item's layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Publication date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// The headline.
    pub title: String,
    /// Link to the story.
    pub link: String,
    /// Content category.
    pub category: Category,
}

/// Counts of items that did not yield a record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkipStats {
    /// Items whose class list matched none of the known layouts.
    pub unclassified: usize,
    /// Items that were classified but failed extraction.
    pub failed: usize,
}

impl SkipStats {
    pub fn total(&self) -> usize {
        self.unclassified + self.failed
    }
}

/// The result of running the pipeline over one page.
#[derive(Debug, Default, Serialize)]
pub struct Harvest {
    /// Records that passed the date and category filter, de-duplicated.
    pub records: Vec<NewsRecord>,
    /// Items skipped before a record could be built.
    pub skipped: SkipStats,
    /// Records extracted successfully but rejected by the filter.
    pub filtered_out: usize,
    /// Records dropped as exact duplicates of an earlier one.
    pub duplicates: usize,
}
