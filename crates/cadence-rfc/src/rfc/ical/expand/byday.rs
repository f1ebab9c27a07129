//! BYDAY expansion: a weekday within the period that contains a date.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use super::calendar::resolve_signed;
use crate::rfc::ical::core::{Frequency, RRule, WeekdayNum};

/// The span a BYDAY entry is expanded over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayScope {
    /// The date itself, if its weekday matches.
    Day,
    /// The Monday-started ISO week containing the date.
    Week,
    /// Every matching weekday of the date's month.
    Month,
    /// Every matching weekday of the date's year.
    Year,
}

impl WeekdayScope {
    /// Picks the scope from the frequency and the wider BY* lists in play.
    #[must_use]
    pub fn for_rule(rule: &RRule, freq: Frequency) -> Self {
        if matches!(
            freq,
            Frequency::Daily | Frequency::Hourly | Frequency::Minutely | Frequency::Secondly
        ) {
            Self::Day
        } else if freq == Frequency::Weekly || !rule.by_weekno().is_empty() {
            Self::Week
        } else if freq == Frequency::Monthly || !rule.by_month().is_empty() {
            Self::Month
        } else {
            Self::Year
        }
    }
}

/// ## Summary
/// Expands one BYDAY entry for `date`, keeping its time of day.
///
/// Without an ordinal every matching weekday of the scope is returned in
/// chronological order. With one, only the selected weekday is returned
/// (negative counts from the end); an ordinal past either end selects
/// nothing.
#[must_use]
pub fn expand_weekday(
    date: NaiveDateTime,
    weekday: WeekdayNum,
    scope: WeekdayScope,
) -> Vec<NaiveDateTime> {
    let mut matches = weekday_set(date.date(), weekday.weekday.to_chrono(), scope);

    if let Some(ordinal) = weekday.ordinal {
        let len = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        let selected = resolve_signed(ordinal, len)
            .and_then(|position| usize::try_from(position - 1).ok())
            .and_then(|index| matches.get(index).copied());
        matches = selected.into_iter().collect();
    }

    matches
        .into_iter()
        .map(|day| day.and_time(date.time()))
        .collect()
}

fn weekday_set(date: NaiveDate, weekday: chrono::Weekday, scope: WeekdayScope) -> Vec<NaiveDate> {
    match scope {
        WeekdayScope::Day => {
            if date.weekday() == weekday {
                vec![date]
            } else {
                Vec::new()
            }
        }
        WeekdayScope::Week => {
            let monday = date.checked_sub_days(Days::new(u64::from(
                date.weekday().num_days_from_monday(),
            )));
            monday
                .and_then(|m| m.checked_add_days(Days::new(u64::from(weekday.num_days_from_monday()))))
                .into_iter()
                .collect()
        }
        WeekdayScope::Month => date.with_day(1).map_or_else(Vec::new, |first| {
            every_weekday(first, weekday, |d| d.month() == date.month())
        }),
        WeekdayScope::Year => date.with_ordinal(1).map_or_else(Vec::new, |first| {
            every_weekday(first, weekday, |d| d.year() == date.year())
        }),
    }
}

fn every_weekday(
    first: NaiveDate,
    weekday: chrono::Weekday,
    in_period: impl Fn(NaiveDate) -> bool,
) -> Vec<NaiveDate> {
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let mut days = Vec::new();
    let mut next = first.checked_add_days(Days::new(u64::from(offset)));

    while let Some(day) = next.filter(|d| in_period(*d)) {
        days.push(day);
        next = day.checked_add_days(Days::new(7));
    }

    days
}
