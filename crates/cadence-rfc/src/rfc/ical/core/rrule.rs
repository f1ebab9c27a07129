//! iCalendar RRULE (Recurrence Rule) value type (RFC 5545 §3.3.10, §3.8.5.3).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::rfc::ical::parse::{ParseError, ParseErrorKind, ParseResult, parse_rrule};

/// Recurrence frequency (RFC 5545 §3.3.10).
///
/// Ordered by granularity: `Secondly` is the finest, `Yearly` the coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Self::Secondly,
            "MINUTELY" => Self::Minutely,
            "HOURLY" => Self::Hourly,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the two-letter abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    /// Parses a weekday from a two-letter abbreviation (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SU" => Self::Sunday,
            "MO" => Self::Monday,
            "TU" => Self::Tuesday,
            "WE" => Self::Wednesday,
            "TH" => Self::Thursday,
            "FR" => Self::Friday,
            "SA" => Self::Saturday,
            _ => return None,
        })
    }

    /// Returns the equivalent `chrono` weekday.
    #[must_use]
    pub const fn to_chrono(self) -> chrono::Weekday {
        match self {
            Self::Sunday => chrono::Weekday::Sun,
            Self::Monday => chrono::Weekday::Mon,
            Self::Tuesday => chrono::Weekday::Tue,
            Self::Wednesday => chrono::Weekday::Wed,
            Self::Thursday => chrono::Weekday::Thu,
            Self::Friday => chrono::Weekday::Fri,
            Self::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weekday with optional occurrence number.
///
/// Used in BYDAY rule part. Examples:
/// - `MO` - every Monday
/// - `1MO` - first Monday of the month/year
/// - `-1FR` - last Friday of the month/year
///
/// Ordinals that fall outside the period select nothing; they are not
/// rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayNum {
    pub ordinal: Option<i32>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    /// Creates a weekday occurrence without an ordinal.
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    /// Creates a weekday occurrence with an ordinal.
    #[must_use]
    pub const fn nth(ordinal: i32, weekday: Weekday) -> Self {
        Self {
            ordinal: Some(ordinal),
            weekday,
        }
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        write!(f, "{}", self.weekday)
    }
}

/// UNTIL value for RRULE - can be either DATE or DATE-TIME.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Until {
    /// Date-only boundary, compared as midnight of that day.
    Date(NaiveDate),
    /// Date-time boundary. `utc` records a trailing `Z` for serialization;
    /// no timezone conversion is applied.
    DateTime { value: NaiveDateTime, utc: bool },
}

impl Until {
    /// Returns the inclusive upper bound as a wall-clock instant.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_time(NaiveTime::MIN),
            Self::DateTime { value, .. } => *value,
        }
    }
}

impl fmt::Display for Until {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime { value, utc } => {
                write!(f, "{}", value.format("%Y%m%dT%H%M%S"))?;
                if *utc {
                    f.write_str("Z")?;
                }
                Ok(())
            }
        }
    }
}

/// How a recurrence ends. COUNT and UNTIL are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Until(Until),
    Count(u32),
}

/// Recurrence rule (RFC 5545 §3.3.10, §3.8.5.3).
///
/// Immutable once built; use [`RRuleBuilder`] (or [`RRule::to_builder`] for a
/// modified copy). An empty BY* list means the part is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RRule {
    freq: Option<Frequency>,
    interval: Option<u32>,
    termination: Option<Termination>,
    wkst: Option<Weekday>,
    by_second: Vec<u8>,
    by_minute: Vec<u8>,
    by_hour: Vec<u8>,
    by_day: Vec<WeekdayNum>,
    by_monthday: Vec<i8>,
    by_yearday: Vec<i16>,
    by_weekno: Vec<i8>,
    by_month: Vec<u8>,
    by_setpos: Vec<i32>,
    extensions: BTreeMap<String, String>,
}

impl RRule {
    /// Starts a builder for the given frequency.
    #[must_use]
    pub fn builder(freq: Frequency) -> RRuleBuilder {
        RRuleBuilder::default().freq(freq)
    }

    /// Returns a builder pre-populated with this rule's parts.
    #[must_use]
    pub fn to_builder(&self) -> RRuleBuilder {
        RRuleBuilder { rule: self.clone() }
    }

    /// Recurrence frequency; `None` when the rule text had no FREQ.
    #[must_use]
    pub const fn freq(&self) -> Option<Frequency> {
        self.freq
    }

    /// Effective interval (1 when absent).
    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval.unwrap_or(1)
    }

    /// Interval exactly as given.
    #[must_use]
    pub const fn explicit_interval(&self) -> Option<u32> {
        self.interval
    }

    #[must_use]
    pub const fn termination(&self) -> Option<Termination> {
        self.termination
    }

    #[must_use]
    pub const fn until(&self) -> Option<Until> {
        match self.termination {
            Some(Termination::Until(until)) => Some(until),
            _ => None,
        }
    }

    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self.termination {
            Some(Termination::Count(count)) => Some(count),
            _ => None,
        }
    }

    /// Week start day (Monday when absent).
    #[must_use]
    pub fn week_start(&self) -> Weekday {
        self.wkst.unwrap_or(Weekday::Monday)
    }

    #[must_use]
    pub const fn explicit_week_start(&self) -> Option<Weekday> {
        self.wkst
    }

    #[must_use]
    pub fn by_second(&self) -> &[u8] {
        &self.by_second
    }

    #[must_use]
    pub fn by_minute(&self) -> &[u8] {
        &self.by_minute
    }

    #[must_use]
    pub fn by_hour(&self) -> &[u8] {
        &self.by_hour
    }

    #[must_use]
    pub fn by_day(&self) -> &[WeekdayNum] {
        &self.by_day
    }

    #[must_use]
    pub fn by_monthday(&self) -> &[i8] {
        &self.by_monthday
    }

    #[must_use]
    pub fn by_yearday(&self) -> &[i16] {
        &self.by_yearday
    }

    #[must_use]
    pub fn by_weekno(&self) -> &[i8] {
        &self.by_weekno
    }

    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    #[must_use]
    pub fn by_setpos(&self) -> &[i32] {
        &self.by_setpos
    }

    /// Unrecognized rule parts, kept verbatim.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeMap<String, String> {
        &self.extensions
    }
}

/// Builder for [`RRule`].
///
/// Setting COUNT replaces UNTIL and vice versa. Range checks run in
/// [`RRuleBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RRuleBuilder {
    rule: RRule,
}

impl RRuleBuilder {
    #[must_use]
    pub fn freq(mut self, freq: Frequency) -> Self {
        self.rule.freq = Some(freq);
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.rule.interval = Some(interval);
        self
    }

    /// Sets the count, clearing any UNTIL.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.rule.termination = Some(Termination::Count(count));
        self
    }

    /// Sets the until boundary, clearing any COUNT.
    #[must_use]
    pub fn until(mut self, until: Until) -> Self {
        self.rule.termination = Some(Termination::Until(until));
        self
    }

    #[must_use]
    pub fn wkst(mut self, wkst: Weekday) -> Self {
        self.rule.wkst = Some(wkst);
        self
    }

    #[must_use]
    pub fn by_second(mut self, seconds: Vec<u8>) -> Self {
        self.rule.by_second = seconds;
        self
    }

    #[must_use]
    pub fn by_minute(mut self, minutes: Vec<u8>) -> Self {
        self.rule.by_minute = minutes;
        self
    }

    #[must_use]
    pub fn by_hour(mut self, hours: Vec<u8>) -> Self {
        self.rule.by_hour = hours;
        self
    }

    #[must_use]
    pub fn by_day(mut self, days: Vec<WeekdayNum>) -> Self {
        self.rule.by_day = days;
        self
    }

    #[must_use]
    pub fn by_monthday(mut self, days: Vec<i8>) -> Self {
        self.rule.by_monthday = days;
        self
    }

    #[must_use]
    pub fn by_yearday(mut self, days: Vec<i16>) -> Self {
        self.rule.by_yearday = days;
        self
    }

    #[must_use]
    pub fn by_weekno(mut self, weeks: Vec<i8>) -> Self {
        self.rule.by_weekno = weeks;
        self
    }

    #[must_use]
    pub fn by_month(mut self, months: Vec<u8>) -> Self {
        self.rule.by_month = months;
        self
    }

    #[must_use]
    pub fn by_setpos(mut self, positions: Vec<i32>) -> Self {
        self.rule.by_setpos = positions;
        self
    }

    /// Adds an unrecognized rule part; a repeated key keeps the last value.
    #[must_use]
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rule.extensions.insert(key.into(), value.into());
        self
    }

    /// Validates and returns the rule.
    ///
    /// ## Errors
    /// Returns `ParseErrorKind::OutOfRange` naming the offending part when
    /// INTERVAL or COUNT is zero, a BYMONTH entry is outside 1..=12, or a
    /// BYSECOND entry exceeds 60.
    pub fn build(self) -> ParseResult<RRule> {
        let rule = self.rule;

        if rule.interval == Some(0) {
            return Err(out_of_range("INTERVAL", 0));
        }
        if let Some(Termination::Count(0)) = rule.termination {
            return Err(out_of_range("COUNT", 0));
        }
        if let Some(month) = rule.by_month.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(out_of_range("BYMONTH", month));
        }
        if let Some(second) = rule.by_second.iter().find(|s| **s > 60) {
            return Err(out_of_range("BYSECOND", second));
        }

        Ok(rule)
    }
}

fn out_of_range(key: &str, value: impl fmt::Display) -> ParseError {
    ParseError::new(ParseErrorKind::OutOfRange, format!("{key}={value}"))
}

fn push_list<T: fmt::Display>(parts: &mut Vec<String>, key: &str, values: &[T]) {
    if !values.is_empty() {
        let s: Vec<_> = values.iter().map(ToString::to_string).collect();
        parts.push(format!("{key}={}", s.join(",")));
    }
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(freq) = self.freq {
            parts.push(format!("FREQ={freq}"));
        }

        if let Some(wkst) = self.wkst {
            parts.push(format!("WKST={wkst}"));
        }

        if let Some(interval) = self.interval {
            parts.push(format!("INTERVAL={interval}"));
        }

        match self.termination {
            Some(Termination::Until(until)) => parts.push(format!("UNTIL={until}")),
            Some(Termination::Count(count)) => parts.push(format!("COUNT={count}")),
            None => {}
        }

        push_list(&mut parts, "BYMONTH", &self.by_month);
        push_list(&mut parts, "BYWEEKNO", &self.by_weekno);
        push_list(&mut parts, "BYYEARDAY", &self.by_yearday);
        push_list(&mut parts, "BYMONTHDAY", &self.by_monthday);
        push_list(&mut parts, "BYDAY", &self.by_day);
        push_list(&mut parts, "BYHOUR", &self.by_hour);
        push_list(&mut parts, "BYMINUTE", &self.by_minute);
        push_list(&mut parts, "BYSECOND", &self.by_second);
        push_list(&mut parts, "BYSETPOS", &self.by_setpos);

        for (key, value) in &self.extensions {
            parts.push(format!("{key}={value}"));
        }

        write!(f, "{}", parts.join(";"))
    }
}

impl FromStr for RRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rrule(s)
    }
}
