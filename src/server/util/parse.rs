use chrono::{NaiveDate, NaiveTime};

/// Parses a calendar date in `YYYY-MM-DD` form
///
/// # Arguments
/// - `value` - The raw date string, surrounding whitespace is ignored
///
/// # Returns
/// - `Some(NaiveDate)` - The string is a valid calendar date
/// - `None` - The string is empty, malformed, or names a day that does not exist
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses a time of day in `HH:MM` or `HH:MM:SS` form
///
/// # Arguments
/// - `value` - The raw time string, surrounding whitespace is ignored
///
/// # Returns
/// - `Some(NaiveTime)` - Parsed time of day
/// - `None` - Neither accepted format matched
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Interprets a free-form item reference as a catalog id.
///
/// Only strings holding a positive integer qualify; anything else names an item that is
/// not in the catalog.
pub fn parse_catalog_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
