//! Locating the first candidate of a window.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::calendar::days_in_month;
use super::step::advance;
use crate::rfc::ical::core::{Frequency, RRule};

/// Calendar fields from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl From<Frequency> for CalendarField {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Yearly => Self::Year,
            Frequency::Monthly => Self::Month,
            Frequency::Weekly | Frequency::Daily => Self::Day,
            Frequency::Hourly => Self::Hour,
            Frequency::Minutely => Self::Minute,
            Frequency::Secondly => Self::Second,
        }
    }
}

/// ## Summary
/// Returns the finest calendar field the rule varies: the frequency's field
/// or the field of the finest non-empty BY* list, whichever is finer.
#[must_use]
pub fn lowest_variable_field(rule: &RRule, freq: Frequency) -> CalendarField {
    let filters = [
        (!rule.by_month().is_empty(), CalendarField::Month),
        (!rule.by_weekno().is_empty(), CalendarField::Day),
        (!rule.by_yearday().is_empty(), CalendarField::Day),
        (!rule.by_monthday().is_empty(), CalendarField::Day),
        (!rule.by_day().is_empty(), CalendarField::Day),
        (!rule.by_hour().is_empty(), CalendarField::Hour),
        (!rule.by_minute().is_empty(), CalendarField::Minute),
        (!rule.by_second().is_empty(), CalendarField::Second),
    ];

    filters
        .into_iter()
        .filter(|(active, _)| *active)
        .map(|(_, field)| field)
        .fold(CalendarField::from(freq), CalendarField::max)
}

/// ## Summary
/// Computes the first candidate instant at or after the window start.
///
/// Fields down to the lowest variable field come from
/// `max(period_start, anchor)`; finer fields come from the anchor. A
/// day-of-month missing from the target month is clamped to its last day.
/// A seed that still precedes `period_start` is advanced by one frequency
/// unit.
///
/// Returns `None` if the advanced seed overflows.
#[must_use]
pub fn seed(
    rule: &RRule,
    freq: Frequency,
    anchor: NaiveDateTime,
    period_start: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let start = period_start.max(anchor);
    let lvf = lowest_variable_field(rule, freq);
    let pick = |field: CalendarField, from_start: u32, from_anchor: u32| {
        if field <= lvf { from_start } else { from_anchor }
    };

    let year = start.year();
    let month = pick(CalendarField::Month, start.month(), anchor.month());
    let day = pick(CalendarField::Day, start.day(), anchor.day()).min(days_in_month(year, month));
    let hour = pick(CalendarField::Hour, start.hour(), anchor.hour());
    let minute = pick(CalendarField::Minute, start.minute(), anchor.minute());
    let second = pick(CalendarField::Second, start.second(), anchor.second());

    let seed = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;

    if seed < period_start {
        advance(seed, freq, 1)
    } else {
        Some(seed)
    }
}
