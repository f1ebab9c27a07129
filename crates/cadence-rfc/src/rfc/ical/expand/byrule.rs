//! The BY* pipeline: each stage maps every candidate to zero or more
//! candidates, period by period.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::byday::{WeekdayScope, expand_weekday};
use super::calendar::{
    days_in_month, days_in_year, iso_weeks_in_year, resolve_signed, with_month_clamped,
};
use crate::rfc::ical::core::{Frequency, RRule};

/// Pipeline stages in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Month,
    WeekNo,
    YearDay,
    MonthDay,
    Day,
    Hour,
    Minute,
    Second,
}

impl Stage {
    pub const ALL: [Self; 8] = [
        Self::Month,
        Self::WeekNo,
        Self::YearDay,
        Self::MonthDay,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Returns the rule part this stage consumes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "BYMONTH",
            Self::WeekNo => "BYWEEKNO",
            Self::YearDay => "BYYEARDAY",
            Self::MonthDay => "BYMONTHDAY",
            Self::Day => "BYDAY",
            Self::Hour => "BYHOUR",
            Self::Minute => "BYMINUTE",
            Self::Second => "BYSECOND",
        }
    }

    fn is_active(self, rule: &RRule) -> bool {
        match self {
            Self::Month => !rule.by_month().is_empty(),
            Self::WeekNo => !rule.by_weekno().is_empty(),
            Self::YearDay => !rule.by_yearday().is_empty(),
            Self::MonthDay => !rule.by_monthday().is_empty(),
            Self::Day => !rule.by_day().is_empty(),
            Self::Hour => !rule.by_hour().is_empty(),
            Self::Minute => !rule.by_minute().is_empty(),
            Self::Second => !rule.by_second().is_empty(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which stages run for a rule, computed once per expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePlan {
    active: Vec<Stage>,
    select_positions: bool,
    weekday_scope: WeekdayScope,
}

impl StagePlan {
    #[must_use]
    pub fn new(rule: &RRule, freq: Frequency) -> Self {
        Self {
            active: Stage::ALL
                .into_iter()
                .filter(|stage| stage.is_active(rule))
                .collect(),
            select_positions: !rule.by_setpos().is_empty(),
            weekday_scope: WeekdayScope::for_rule(rule, freq),
        }
    }

    /// Active stages in application order.
    #[must_use]
    pub fn active(&self) -> &[Stage] {
        &self.active
    }

    #[must_use]
    pub fn last_active(&self) -> Option<Stage> {
        self.active.last().copied()
    }

    /// BYSETPOS runs once, at the last active stage.
    #[must_use]
    pub fn selects_positions_at(&self, stage: Stage) -> bool {
        self.select_positions && self.last_active() == Some(stage)
    }

    #[must_use]
    pub const fn weekday_scope(&self) -> WeekdayScope {
        self.weekday_scope
    }
}

/// ## Summary
/// Runs the BY* stages over the base instants.
///
/// Each base instant opens its own period; BYSETPOS selects within a period
/// and never across periods.
#[derive(Debug)]
pub struct ByRuleExpander<'a> {
    rule: &'a RRule,
    plan: StagePlan,
}

impl<'a> ByRuleExpander<'a> {
    #[must_use]
    pub fn new(rule: &'a RRule, freq: Frequency) -> Self {
        Self {
            rule,
            plan: StagePlan::new(rule, freq),
        }
    }

    /// Expands the base instants, returning candidates in pipeline order.
    #[must_use]
    pub fn expand(&self, base: Vec<NaiveDateTime>) -> Vec<NaiveDateTime> {
        let mut periods: Vec<Vec<NaiveDateTime>> = base.into_iter().map(|b| vec![b]).collect();

        for &stage in self.plan.active() {
            periods = periods
                .into_iter()
                .map(|period| self.apply(stage, period))
                .collect();

            tracing::trace!(
                stage = %stage,
                count = periods.iter().map(Vec::len).sum::<usize>(),
                "Dates after stage processing"
            );
        }

        periods.into_iter().flatten().collect()
    }

    fn apply(&self, stage: Stage, period: Vec<NaiveDateTime>) -> Vec<NaiveDateTime> {
        let produced: Vec<_> = period
            .into_iter()
            .flat_map(|date| self.expand_date(stage, date))
            .collect();

        if self.plan.selects_positions_at(stage) {
            select_positions(produced, self.rule.by_setpos())
        } else {
            produced
        }
    }

    fn expand_date(&self, stage: Stage, date: NaiveDateTime) -> Vec<NaiveDateTime> {
        let rule = self.rule;
        match stage {
            Stage::Month => rule
                .by_month()
                .iter()
                .filter_map(|&month| with_month_clamped(date, u32::from(month)))
                .collect(),
            Stage::WeekNo => rule
                .by_weekno()
                .iter()
                .filter_map(|&week| by_weekno(date, i32::from(week)))
                .collect(),
            Stage::YearDay => rule
                .by_yearday()
                .iter()
                .filter_map(|&day| by_yearday(date, i32::from(day)))
                .collect(),
            Stage::MonthDay => rule
                .by_monthday()
                .iter()
                .filter_map(|&day| by_monthday(date, i32::from(day)))
                .collect(),
            Stage::Day => rule
                .by_day()
                .iter()
                .flat_map(|&weekday| expand_weekday(date, weekday, self.plan.weekday_scope()))
                .collect(),
            Stage::Hour => rule
                .by_hour()
                .iter()
                .filter_map(|&hour| date.with_hour(u32::from(hour)))
                .collect(),
            Stage::Minute => rule
                .by_minute()
                .iter()
                .filter_map(|&minute| date.with_minute(u32::from(minute)))
                .collect(),
            Stage::Second => rule
                .by_second()
                .iter()
                .filter_map(|&second| date.with_second(u32::from(second)))
                .collect(),
        }
    }
}

/// Moves to the same weekday of ISO week `week` of the date's calendar year.
fn by_weekno(date: NaiveDateTime, week: i32) -> Option<NaiveDateTime> {
    let year = date.year();
    let week = resolve_signed(week, iso_weeks_in_year(year))?;
    NaiveDate::from_isoywd_opt(year, week, date.weekday()).map(|d| d.and_time(date.time()))
}

fn by_yearday(date: NaiveDateTime, day: i32) -> Option<NaiveDateTime> {
    let year = date.year();
    let ordinal = resolve_signed(day, days_in_year(year))?;
    NaiveDate::from_yo_opt(year, ordinal).map(|d| d.and_time(date.time()))
}

fn by_monthday(date: NaiveDateTime, day: i32) -> Option<NaiveDateTime> {
    let day = resolve_signed(day, days_in_month(date.year(), date.month()))?;
    date.with_day(day)
}

/// ## Summary
/// Applies BYSETPOS to one period's candidates.
///
/// Positions index the candidates in the order the stage produced them,
/// 1-based, negative counting from the end. They are taken in the order
/// listed; positions outside the set are skipped.
#[must_use]
pub fn select_positions(candidates: Vec<NaiveDateTime>, positions: &[i32]) -> Vec<NaiveDateTime> {
    let len = u32::try_from(candidates.len()).unwrap_or(u32::MAX);

    positions
        .iter()
        .filter_map(|&position| resolve_signed(position, len))
        .filter_map(|position| usize::try_from(position - 1).ok())
        .filter_map(|index| candidates.get(index).copied())
        .collect()
}
