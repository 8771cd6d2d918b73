//! Publication dates embedded in links and image paths.
//!
//! Story URLs carry their date either as `YYYY/MM/DD` (`/news/2020/02/22/slug/`)
//! or as a dashed `NN-NN-YYYY` group (`/pics/02-22-2020/x.jpg`).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2})-(\d{2})-(\d{4})|(\d{4})/(\d{2})/(\d{2})").expect("valid date pattern")
});

/// Find the first embedded date in `text`.
///
/// Only the first pattern match is considered. A match that does not denote
/// a real calendar date counts as no match at all.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_PATTERN.captures(text)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    if caps.get(1).is_some() {
        let (a, b) = (num(1)?, num(2)?);
        let year = num(3)? as i32;
        // Month first, then day first when the month is out of range.
        NaiveDate::from_ymd_opt(year, a, b).or_else(|| NaiveDate::from_ymd_opt(year, b, a))
    } else {
        NaiveDate::from_ymd_opt(num(4)? as i32, num(5)?, num(6)?)
    }
}

/// Parse a date typed on the command line.
///
/// Accepts `YYYY-MM-DD`, `DD.MM.YYYY` and `YYYY/MM/DD`.
pub fn parse_target_date(input: &str) -> Result<NaiveDate, String> {
    let input = input.trim();
    ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .ok_or_else(|| format!("unrecognised date `{input}` (expected YYYY-MM-DD or DD.MM.YYYY)"))
}
