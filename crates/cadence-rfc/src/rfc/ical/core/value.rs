//! iCalendar DATE and DATE-TIME values as produced by recurrence expansion
//! (RFC 5545 §3.3.4, §3.3.5).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

use crate::rfc::ical::parse::{ParseError, parse_date_value};

/// Discriminates DATE from DATE-TIME values (the `VALUE` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "DATE-TIME")]
    DateTime,
}

impl ValueKind {
    /// Returns the `VALUE` parameter token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A floating DATE or DATE-TIME.
///
/// Equality, ordering and hashing use the instant only, so a DATE equals the
/// DATE-TIME at midnight of the same day.
#[derive(Debug, Clone, Copy)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    /// Returns the wall-clock instant; a DATE maps to 00:00:00.
    #[must_use]
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => *dt,
        }
    }

    /// Returns the calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(d) => *d,
            Self::DateTime(dt) => dt.date(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Converts to the given kind. Converting to DATE drops the time of day.
    #[must_use]
    pub fn to_kind(self, kind: ValueKind) -> Self {
        match kind {
            ValueKind::Date => Self::Date(self.date()),
            ValueKind::DateTime => Self::DateTime(self.instant()),
        }
    }

    /// Builds a value of the given kind from an instant.
    #[must_use]
    pub fn from_instant(instant: NaiveDateTime, kind: ValueKind) -> Self {
        Self::DateTime(instant).to_kind(kind)
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        self.instant() == other.instant()
    }
}

impl Eq for DateValue {}

impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant().cmp(&other.instant())
    }
}

impl Hash for DateValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y%m%dT%H%M%S")),
        }
    }
}

impl FromStr for DateValue {
    type Err = ParseError;

    /// Parses `YYYYMMDD`, falling back to `YYYYMMDDTHHMMSS[Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_value(s)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered occurrence list of a single value kind.
///
/// Order is the order the expansion produced; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateList {
    kind: ValueKind,
    dates: Vec<DateValue>,
}

impl DateList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            dates: Vec::new(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Appends a value, converting it to this list's kind.
    pub fn push(&mut self, value: DateValue) {
        self.dates.push(value.to_kind(self.kind));
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<DateValue> {
        self.dates
    }
}

impl Deref for DateList {
    type Target = [DateValue];

    fn deref(&self) -> &Self::Target {
        &self.dates
    }
}

impl IntoIterator for DateList {
    type Item = DateValue;
    type IntoIter = std::vec::IntoIter<DateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a DateList {
    type Item = &'a DateValue;
    type IntoIter = std::slice::Iter<'a, DateValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

impl Extend<DateValue> for DateList {
    fn extend<T: IntoIterator<Item = DateValue>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl fmt::Display for DateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.dates.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
