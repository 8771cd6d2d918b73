//! Record assembly: classify, extract, filter, resolve and de-duplicate.
//!
//! The pipeline turns a sequence of items into a [`Harvest`]. Nothing here is
//! fatal: unclassified items and extraction failures are counted and logged,
//! and processing continues with the next item.

use crate::engine::{Fragment, classify, extract};
use crate::models::{Category, Harvest, NewsRecord};
use chrono::NaiveDate;
use itertools::Itertools;
use tracing::{debug, info, warn};
use url::Url;

/// Which records the caller wants to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFilter {
    /// Only records published on this date are kept.
    pub date: NaiveDate,
    /// When set, only records of this category are kept.
    pub category: Option<Category>,
}

impl RecordFilter {
    pub fn matches(&self, record: &NewsRecord) -> bool {
        record.date == self.date && self.category.is_none_or(|c| c == record.category)
    }
}

/// Make a site-relative link absolute.
///
/// Links that already parse as absolute URLs are returned untouched.
pub fn resolve_link(link: &str, origin: &Url) -> String {
    if Url::parse(link).is_ok() {
        return link.to_string();
    }
    match origin.join(link) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(%link, %origin, error = %e, "Could not resolve link; prefixing origin");
            format!("{}{}", origin.as_str().trim_end_matches('/'), link)
        }
    }
}

/// Run every item through classification and extraction and collect the
/// records matching `filter`.
///
/// Input order is preserved; when a record occurs more than once only the
/// first occurrence is kept.
pub fn harvest<F, I>(items: I, filter: &RecordFilter, origin: &Url) -> Harvest
where
    F: Fragment,
    I: IntoIterator<Item = F>,
{
    let mut out = Harvest::default();
    let mut kept = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let markers = item.markers();
        let Some(variant) = classify(&markers) else {
            if markers.is_empty() {
                debug!(index, "Skipping item without classes");
            } else {
                debug!(index, ?markers, "Skipping unclassified item");
            }
            out.skipped.unclassified += 1;
            continue;
        };

        let record = match extract(&item, variant) {
            Ok(record) => record,
            Err(e) => {
                warn!(index, %variant, error = %e, "Extraction failed; skipping item");
                out.skipped.failed += 1;
                continue;
            }
        };

        if !filter.matches(&record) {
            debug!(index, %variant, date = %record.date, category = %record.category, "Filtered out");
            out.filtered_out += 1;
            continue;
        }

        kept.push(NewsRecord {
            link: resolve_link(&record.link, origin),
            ..record
        });
    }

    let before = kept.len();
    out.records = kept.into_iter().unique().collect();
    out.duplicates = before - out.records.len();

    info!(
        kept = out.records.len(),
        unclassified = out.skipped.unclassified,
        failed = out.skipped.failed,
        filtered_out = out.filtered_out,
        duplicates = out.duplicates,
        "Harvest complete"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn origin() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    fn record(date: NaiveDate, category: Category) -> NewsRecord {
        NewsRecord {
            date,
            title: "Title".to_string(),
            link: "/news/2020/02/22/x/".to_string(),
            category,
        }
    }

    fn run(markup: &str, filter: &RecordFilter) -> Harvest {
        let html = Html::parse_fragment(markup);
        let selector = Selector::parse("div.first-item, div.item, div.b-tabloid__topic, div.promo").unwrap();
        harvest(html.select(&selector), filter, &origin())
    }

    const PAGE: &str = r#"
        <div class="item"><a href="/news/2020/02/22/one/">14:05One</a></div>
        <div class="item"><a href="/news/2020/02/21/old/">14:05Old</a></div>
        <div class="promo"><a href="/news/2020/02/22/ad/">Ad</a></div>
        <div class="b-tabloid__topic news"><a href="/news/2020/02/22/one/">One</a></div>
        <div class="b-tabloid__topic article"><a href="/articles/2020/02/22/long/"><span>Long</span></a></div>
        <div class="b-tabloid__topic article"><a href="/extlink/undated"><span>Broken</span></a></div>
    "#;

    #[test]
    fn test_filter_by_date_only() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: None,
        };
        assert!(filter.matches(&record(ymd(2020, 2, 22), Category::News)));
        assert!(filter.matches(&record(ymd(2020, 2, 22), Category::Articles)));
        assert!(!filter.matches(&record(ymd(2020, 2, 21), Category::News)));
    }

    #[test]
    fn test_filter_by_date_and_category() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: Some(Category::Articles),
        };
        assert!(filter.matches(&record(ymd(2020, 2, 22), Category::Articles)));
        assert!(!filter.matches(&record(ymd(2020, 2, 22), Category::News)));
        assert!(!filter.matches(&record(ymd(2020, 2, 21), Category::Articles)));
    }

    #[test]
    fn test_resolve_relative_link() {
        assert_eq!(
            resolve_link("/news/123", &origin()),
            "https://example.com/news/123"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_link() {
        let link = "https://moslenta.ru/city/park.htm";
        assert_eq!(resolve_link(link, &origin()), link);
    }

    #[test]
    fn test_harvest_counts_and_dedup() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: None,
        };
        let out = run(PAGE, &filter);

        assert_eq!(out.skipped.unclassified, 1);
        assert_eq!(out.skipped.failed, 1);
        assert_eq!(out.filtered_out, 1);
        assert_eq!(out.duplicates, 1);

        let titles: Vec<_> = out.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Long"]);
        assert_eq!(out.records[0].link, "https://example.com/news/2020/02/22/one/");
        assert_eq!(out.records[1].category, Category::Articles);
    }

    #[test]
    fn test_harvest_with_category_filter() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: Some(Category::News),
        };
        let out = run(PAGE, &filter);

        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].category, Category::News);
        assert_eq!(out.filtered_out, 2);
    }

    #[test]
    fn test_harvest_resolves_links_of_kept_records() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: None,
        };
        let page = r#"
            <div class="b-tabloid__topic news"><a href="/news/2020/02/22/rel/">Relative</a></div>
            <div class="b-tabloid__topic news"><a href="https://lenta.ru/news/2020/02/22/abs/">Absolute</a></div>
            <div class=""><a href="/news/2020/02/22/bare/">Bare</a></div>
        "#;
        let html = Html::parse_fragment(page);
        let selector = Selector::parse("div").unwrap();
        let out = harvest(html.select(&selector), &filter, &origin());

        assert_eq!(out.skipped.unclassified, 1);
        let links: Vec<_> = out.records.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://example.com/news/2020/02/22/rel/",
                "https://lenta.ru/news/2020/02/22/abs/"
            ]
        );
        assert_eq!(out.records[0].title, "Relative");
        assert_eq!(out.records[0].date, ymd(2020, 2, 22));
    }

    #[test]
    fn test_identical_records_kept_once() {
        let filter = RecordFilter {
            date: ymd(2020, 2, 22),
            category: None,
        };
        let page = r#"
            <div class="b-tabloid__topic news"><a href="/news/2020/02/22/same/">Same</a></div>
            <div class="b-tabloid__topic news"><a href="/news/2020/02/22/same/">Same </a></div>
        "#;
        let out = run(page, &filter);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.duplicates, 1);
    }
}
