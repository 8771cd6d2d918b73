//! Per-layout field extraction.
//!
//! Each [`Variant`] has exactly one rule function. [`extract`] looks the rule
//! up in a static mapping and runs it; there is no open-ended dispatch on the
//! item's markup beyond what [`classify`](super::variant::classify) decided.
//!
//! # Layouts
//!
//! | Variant | Link | Title | Date source |
//! |---------|------|-------|-------------|
//! | `main_news` | first `a[href]` | first `a` text, time or label stripped | link |
//! | `first_news` | first `a[href]` | `h2 a` text, 5-char prefix stripped | link |
//! | `longread_news` | `div.titles h3 a[href]` | same anchor's text | link |
//! | `longread_articles` | `div.titles h3 a[href]` | same anchor's text | `a.picture[href]`, then its `img[src]` |
//! | `tabloid_news` | first `a[href]` | first `a` text | link |
//! | `tabloid_articles` | first `a[href]` | `a span` text | link, then `a img[src]` |

use super::dates::find_date;
use super::fragment::Fragment;
use super::variant::Variant;
use crate::error::{ExtractionError, Result};
use crate::models::NewsRecord;
use chrono::NaiveDate;
use tracing::trace;

type Rule<F> = fn(&F) -> Result<NewsRecord>;

/// Run the extraction rule for `variant` against `item`.
pub fn extract<F: Fragment>(item: &F, variant: Variant) -> Result<NewsRecord> {
    let rule = rule_for::<F>(variant);
    let record = rule(item)?;
    trace!(%variant, title = %record.title, link = %record.link, "Extracted item");
    Ok(record)
}

fn rule_for<F: Fragment>(variant: Variant) -> Rule<F> {
    match variant {
        Variant::MainNews => main_news::<F>,
        Variant::FirstNews => first_news::<F>,
        Variant::LongreadNews => longread_news::<F>,
        Variant::LongreadArticles => longread_articles::<F>,
        Variant::TabloidNews => tabloid_news::<F>,
        Variant::TabloidArticles => tabloid_articles::<F>,
    }
}

fn main_news<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let anchor = item.require("a", None)?;
    let link = anchor.require_attr("a", "href")?.to_string();
    let title = strip_inline_label(&anchor.text());
    let date = date_in(&link)?;
    Ok(record(Variant::MainNews, date, title, link))
}

fn first_news<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let link = item
        .require("a", None)?
        .require_attr("a", "href")?
        .to_string();
    let heading_anchor = item.require("h2", None)?.require("a", None)?;
    let title = strip_prefix_chars(&heading_anchor.text(), 5);
    let date = date_in(&link)?;
    Ok(record(Variant::FirstNews, date, title, link))
}

fn longread_news<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let (link, title) = titles_anchor(item)?;
    let date = date_in(&link)?;
    Ok(record(Variant::LongreadNews, date, title, link))
}

fn longread_articles<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let (link, title) = titles_anchor(item)?;
    let picture = item.require("a", Some("picture"))?;
    let date = date_with_fallback(picture.attr("href"), || {
        let img = picture.require("img", None)?;
        Ok(img.require_attr("img", "src")?.to_string())
    })?;
    Ok(record(Variant::LongreadArticles, date, title, link))
}

fn tabloid_news<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let anchor = item.require("a", None)?;
    let link = anchor.require_attr("a", "href")?.to_string();
    let title = anchor.text().trim_end().to_string();
    let date = date_in(&link)?;
    Ok(record(Variant::TabloidNews, date, title, link))
}

fn tabloid_articles<F: Fragment>(item: &F) -> Result<NewsRecord> {
    let anchor = item.require("a", None)?;
    let link = anchor.require_attr("a", "href")?.to_string();
    let title = anchor.require("span", None)?.text().trim_end().to_string();
    let date = date_with_fallback(Some(link.as_str()), || {
        let img = anchor.require("img", None)?;
        Ok(img.require_attr("img", "src")?.to_string())
    })?;
    Ok(record(Variant::TabloidArticles, date, title, link))
}

/// Link and title from the `div.titles > h3 > a` block of longread rows.
fn titles_anchor<F: Fragment>(item: &F) -> Result<(String, String)> {
    let anchor = item
        .require("div", Some("titles"))?
        .require("h3", None)?
        .require("a", None)?;
    let link = anchor.require_attr("a", "href")?.to_string();
    Ok((link, anchor.text().trim_end().to_string()))
}

/// Drop an inline label when the third character is a colon.
///
/// The label is either a `HH:MM` time (five characters) or a two letter tag
/// such as `UA:` followed by whitespace.
fn strip_inline_label(text: &str) -> String {
    let chars: Vec<char> = text.chars().take(5).collect();
    if chars.get(2) != Some(&':') {
        return text.trim_end().to_string();
    }
    if chars.len() == 5 && chars[3..].iter().all(char::is_ascii_digit) {
        strip_prefix_chars(text, 5)
    } else {
        strip_prefix_chars(text, 3).trim_start().to_string()
    }
}

fn strip_prefix_chars(text: &str, n: usize) -> String {
    let rest = text.char_indices().nth(n).map_or("", |(i, _)| &text[i..]);
    rest.trim_end().to_string()
}

fn date_in(text: &str) -> Result<NaiveDate> {
    find_date(text).ok_or_else(|| ExtractionError::NoDateMatch {
        input: text.to_string(),
    })
}

/// Date from `primary` if present and dated, otherwise from whatever
/// `fallback` yields.
fn date_with_fallback(
    primary: Option<&str>,
    fallback: impl FnOnce() -> Result<String>,
) -> Result<NaiveDate> {
    if let Some(date) = primary.and_then(find_date) {
        return Ok(date);
    }
    let secondary = fallback()?;
    date_in(&secondary)
}

fn record(variant: Variant, date: NaiveDate, title: String, link: String) -> NewsRecord {
    NewsRecord {
        date,
        title,
        link,
        category: variant.category(),
    }
}
