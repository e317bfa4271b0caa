//! Timestamp utilities
//!
//! Show start times are naive local timestamps, compared against the local
//! wall clock.

use chrono::{Local, NaiveDateTime};

/// Storage and view-model format for show start times
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted from the show creation form
const INPUT_FORMATS: &[&str] = &[
    START_TIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Display style for rendered dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// e.g. "Mon 05, 21, 2035 09:30PM"
    Medium,
    /// e.g. "Monday May, 21, 2035 at 9:30PM"
    Full,
}

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a start time in the view-model format
pub fn format_start_time(value: &NaiveDateTime) -> String {
    value.format(START_TIME_FORMAT).to_string()
}

/// Parse a start time submitted through a form
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a view-model start time for display
///
/// Values that do not parse are returned unchanged.
pub fn format_datetime(value: &str, style: DateStyle) -> String {
    let Some(parsed) = parse_start_time(value) else {
        return value.to_string();
    };

    let pattern = match style {
        DateStyle::Medium => "%a %m, %d, %Y %I:%M%p",
        DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    parsed.format(pattern).to_string()
}
