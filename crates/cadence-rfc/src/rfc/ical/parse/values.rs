//! Value parsers for RRULE text and the date literals it carries.
//!
//! Error sources are discarded in favor of naming the offending token.
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report the offending token instead of the std parse error"
)]

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::ical::core::{
    DateValue, Frequency, RRule, RRuleBuilder, Until, Weekday, WeekdayNum,
};

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit calendar date.
pub fn parse_date(s: &str) -> ParseResult<NaiveDate> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDate, s);

    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year = s[0..4].parse::<i32>().map_err(|_| invalid())?;
    let month = s[4..6].parse::<u32>().map_err(|_| invalid())?;
    let day = s[6..8].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z"). Returns the
/// wall-clock value and whether the UTC marker was present.
///
/// ## Errors
/// Returns an error if the string is not a valid date-time.
pub fn parse_datetime(s: &str) -> ParseResult<(NaiveDateTime, bool)> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDateTime, s);

    let (date_str, time_str) = s.split_once('T').ok_or_else(invalid)?;
    let (time_str, is_utc) = match time_str.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (time_str, false),
    };

    if time_str.len() != 6 || !time_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let date = parse_date(date_str).map_err(|_| invalid())?;
    let hour = time_str[0..2].parse::<u32>().map_err(|_| invalid())?;
    let minute = time_str[2..4].parse::<u32>().map_err(|_| invalid())?;
    let second = time_str[4..6].parse::<u32>().map_err(|_| invalid())?;

    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)?;

    Ok((date.and_time(time), is_utc))
}

/// Parses a DATE, falling back to DATE-TIME only if the date parse fails.
///
/// ## Errors
/// Returns `InvalidDateTime` if neither form matches.
pub fn parse_date_value(s: &str) -> ParseResult<DateValue> {
    if let Ok(date) = parse_date(s) {
        return Ok(DateValue::Date(date));
    }
    let (datetime, _) = parse_datetime(s)?;
    Ok(DateValue::DateTime(datetime))
}

/// Parses an UNTIL value: DATE first, then DATE-TIME.
///
/// ## Errors
/// Returns `InvalidUntil` if both parses fail.
pub fn parse_until(s: &str) -> ParseResult<Until> {
    if let Ok(date) = parse_date(s) {
        return Ok(Until::Date(date));
    }
    parse_datetime(s)
        .map(|(value, utc)| Until::DateTime { value, utc })
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidUntil, s))
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// Rule part names are case-sensitive; anything that is not a known name is
/// kept as an extension. A missing FREQ is accepted here and reported when
/// the rule is expanded.
///
/// ## Errors
/// Returns an error naming the offending token if a part lacks `=`, a value
/// is malformed, or a value is out of range.
pub fn parse_rrule(s: &str) -> ParseResult<RRule> {
    tracing::trace!(rule = s, "Parsing RRULE");

    let mut builder = RRuleBuilder::default();

    for part in s.split(';').filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidRRule, part))?;

        builder = parse_rrule_part(builder, key, value)?;
    }

    builder.build()
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(builder: RRuleBuilder, key: &str, value: &str) -> ParseResult<RRuleBuilder> {
    Ok(match key {
        "FREQ" => builder.freq(
            Frequency::parse(value)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFrequency, value))?,
        ),
        "UNTIL" => builder.until(parse_until(value)?),
        "COUNT" => builder.count(parse_integer(value)?),
        "INTERVAL" => builder.interval(parse_integer(value)?),
        "WKST" => builder.wkst(
            Weekday::parse(value)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidWeekday, value))?,
        ),
        "BYSECOND" => builder.by_second(parse_list(value)?),
        "BYMINUTE" => builder.by_minute(parse_list(value)?),
        "BYHOUR" => builder.by_hour(parse_list(value)?),
        "BYDAY" => builder.by_day(parse_byday(value)?),
        "BYMONTHDAY" => builder.by_monthday(parse_list(value)?),
        "BYYEARDAY" => builder.by_yearday(parse_list(value)?),
        "BYWEEKNO" => builder.by_weekno(parse_list(value)?),
        "BYMONTH" => builder.by_month(parse_list(value)?),
        "BYSETPOS" => builder.by_setpos(parse_list(value)?),
        _ => builder.extension(key, value),
    })
}

fn parse_integer<T: FromStr>(s: &str) -> ParseResult<T> {
    s.trim()
        .parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidInteger, s))
}

/// Parses a comma-separated list of integers.
fn parse_list<T: FromStr>(s: &str) -> ParseResult<Vec<T>> {
    s.split(',').map(parse_integer).collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
fn parse_byday(s: &str) -> ParseResult<Vec<WeekdayNum>> {
    s.split(',').map(|v| parse_weekday_num(v.trim())).collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(s: &str) -> ParseResult<WeekdayNum> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidWeekday, s);

    // The weekday is always the last two characters.
    let split = s.len().checked_sub(2).ok_or_else(invalid)?;
    let ordinal_str = s.get(..split).ok_or_else(invalid)?;
    let weekday_str = s.get(split..).ok_or_else(invalid)?;

    let weekday = Weekday::parse(weekday_str).ok_or_else(invalid)?;

    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        Some(
            ordinal_str
                .parse()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidInteger, s))?,
        )
    };

    Ok(WeekdayNum { ordinal, weekday })
}
