//! Loose date parsing for resume date fields

use chrono::{DateTime, Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

// Full dates accepted by the generic fallback
const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

// Month-precision forms; parsed by pinning the day to the first
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%b %Y"];

struct DatePatterns {
    year: Regex,
    month_slash_year: Regex,
    month_name_year: Regex,
}

fn patterns() -> &'static DatePatterns {
    static PATTERNS: OnceLock<DatePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DatePatterns {
        year: Regex::new(r"^\d{4}$").expect("Invalid year regex"),
        month_slash_year: Regex::new(r"^(\d{1,2})/(\d{4})$").expect("Invalid month/year regex"),
        month_name_year: Regex::new(r"^([A-Za-z]+)\s+(\d{4})$").expect("Invalid month name regex"),
    })
}

/// Parse a resume date such as `2020`, `03/2020`, `March 2020` or `2020-03-15`.
///
/// Returns `None` for blank or unrecognised input rather than failing; callers
/// treat an unparseable date as missing data.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let patterns = patterns();

    if patterns.year.is_match(text) {
        let year = text.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some(caps) = patterns.month_slash_year.captures(text) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(caps) = patterns.month_name_year.captures(text) {
        let name = caps[1].to_lowercase();
        if let Some(index) = MONTHS.iter().position(|m| *m == name) {
            let year: i32 = caps[2].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, index as u32 + 1, 1);
        }
    }

    parse_generic(text)
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }

    FULL_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            let pinned = format!("{} 1", text);
            MONTH_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&pinned, &format!("{} %d", format)).ok())
        })
}

/// Whole calendar months from `start` to `end`; days are ignored and the
/// result is negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month0()) - i64::from(start.month0());
    years * 12 + months
}
