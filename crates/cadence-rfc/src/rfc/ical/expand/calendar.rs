//! Calendar-unit lengths and signed-index resolution shared by the stages.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Number of days in the given month (28–31).
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Number of days in the given year (365 or 366).
#[must_use]
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_yo_opt(year, 366).is_some() {
        366
    } else {
        365
    }
}

/// Number of ISO 8601 weeks in the given year (52 or 53).
#[must_use]
pub fn iso_weeks_in_year(year: i32) -> u32 {
    if NaiveDate::from_isoywd_opt(year, 53, chrono::Weekday::Mon).is_some() {
        53
    } else {
        52
    }
}

/// Resolves a signed 1-based index against a length: `1` is the first
/// element, `-1` the last. Zero and out-of-range indices resolve to `None`.
#[must_use]
pub fn resolve_signed(index: i32, len: u32) -> Option<u32> {
    let len = i64::from(len);
    let index = i64::from(index);
    let resolved = match index {
        1.. if index <= len => index,
        ..=-1 if -index <= len => len + 1 + index,
        _ => return None,
    };
    u32::try_from(resolved).ok()
}

/// Moves to another month, clamping the day to that month's length.
#[must_use]
pub fn with_month_clamped(date: NaiveDateTime, month: u32) -> Option<NaiveDateTime> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let day = date.day().min(days_in_month(date.year(), month));
    NaiveDate::from_ymd_opt(date.year(), month, day).map(|d| d.and_time(date.time()))
}
