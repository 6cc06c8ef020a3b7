//! Shared formatting helpers for the generated documents

use chrono::{DateTime, TimeZone};

/// Format a timestamp the way the documents show it: `MM/DD/YYYY, HH:MM` (24h).
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%m/%d/%Y, %H:%M").to_string()
}

/// Current local time formatted with [`format_timestamp`].
pub fn now_timestamp() -> String {
    format_timestamp(&chrono::Local::now())
}

/// Format an average over `count` items with one decimal place; an average
/// over nothing renders as `0`.
pub fn format_average(value: f64, count: usize) -> String {
    if count == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", value)
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
