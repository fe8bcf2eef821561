//! Shared helper utilities for factory methods.

use chrono::{NaiveDate, NaiveTime};

/// Counter for generating unique values in tests.
///
/// Each factory-created entity draws from this counter so unique columns such as room
/// numbers and booking references never collide within a test run.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Parses a `YYYY-MM-DD` literal into a date.
///
/// # Panics
/// Panics when the literal is not a valid calendar date, which is a bug in the test.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|_| panic!("invalid test date literal: {value}"))
}

/// Parses a `HH:MM` literal into a time of day.
///
/// # Panics
/// Panics when the literal is not a valid time, which is a bug in the test.
pub fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M")
        .unwrap_or_else(|_| panic!("invalid test time literal: {value}"))
}
