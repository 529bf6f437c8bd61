//! Calendar date helpers for slot values

use chrono::{DateTime, Days, NaiveDate};

/// Textual formats accepted for date slots, tried in order.
///
/// `%B` also accepts abbreviated month names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parse a date slot value, or `None` if the text is not a recognised date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// `date` shifted forward by `days`; `None` for negative counts or overflow
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let days = u64::try_from(days).ok()?;
    date.checked_add_days(Days::new(days))
}

/// Absolute number of days between two dates
pub fn day_difference(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days().abs()
}
