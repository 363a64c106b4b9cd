// src/core/dates.rs

// Result cards show post age relative to "now" ("3 hours ago"). Every
// conversion in a run is anchored to the same scrape start time.

use chrono::{DateTime, Duration, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turn a relative post-date phrase into an absolute UTC time.
///
/// Only `"<N> hour(s) ago"` and `"<N> minute(s) ago"` are understood, with
/// `N` read from the first two characters. Anything else ("30+ days ago",
/// "Just posted", "an hour ago") is left unconverted and yields `None`.
pub fn normalize_post_date(text: &str, scrape_start: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let text = text.trim();
    let unit_secs = if text.contains("hour") {
        3600
    } else if text.contains("minute") {
        60
    } else {
        return None;
    };

    let n = leading_number(text)?;
    Some(scrape_start - Duration::seconds(n * unit_secs))
}

fn leading_number(text: &str) -> Option<i64> {
    let head: String = text.chars().take(2).collect();
    head.trim().parse().ok()
}

pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Drop sub-second precision; records carry whole seconds.
pub fn truncate_to_secs(t: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(t.timestamp(), 0).unwrap_or(t)
}
