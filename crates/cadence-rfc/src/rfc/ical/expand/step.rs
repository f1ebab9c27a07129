//! Frequency stepping with calendar-correct rollover.

use chrono::{Datelike, Months, NaiveDateTime, TimeDelta};

use crate::rfc::ical::core::Frequency;

/// ## Summary
/// Advances `instant` by `units` of the field matching `freq`.
///
/// Month and year steps clamp the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29). Returns `None` on overflow.
#[must_use]
pub fn advance(instant: NaiveDateTime, freq: Frequency, units: u32) -> Option<NaiveDateTime> {
    let signed = i64::from(units);
    match freq {
        Frequency::Secondly => instant.checked_add_signed(TimeDelta::try_seconds(signed)?),
        Frequency::Minutely => instant.checked_add_signed(TimeDelta::try_minutes(signed)?),
        Frequency::Hourly => instant.checked_add_signed(TimeDelta::try_hours(signed)?),
        Frequency::Daily => instant.checked_add_signed(TimeDelta::try_days(signed)?),
        Frequency::Weekly => instant.checked_add_signed(TimeDelta::try_weeks(signed)?),
        Frequency::Monthly => instant.checked_add_months(Months::new(units)),
        Frequency::Yearly => instant.checked_add_months(Months::new(units.checked_mul(12)?)),
    }
}

/// Whole frequency units from `from` to `to`, truncated; negative when `to`
/// precedes `from`.
#[must_use]
pub fn units_between(from: NaiveDateTime, to: NaiveDateTime, freq: Frequency) -> i64 {
    let elapsed = to.signed_duration_since(from);
    let days = to.date().signed_duration_since(from.date()).num_days();
    match freq {
        Frequency::Secondly => elapsed.num_seconds(),
        Frequency::Minutely => elapsed.num_minutes(),
        Frequency::Hourly => elapsed.num_hours(),
        Frequency::Daily => days,
        Frequency::Weekly => days / 7,
        Frequency::Monthly => {
            i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
                - i64::from(from.month())
        }
        Frequency::Yearly => i64::from(to.year() - from.year()),
    }
}
