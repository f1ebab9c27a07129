//! Expansion entry point: ties the seeder, stepper, pipeline and limiter
//! together.

use chrono::NaiveDateTime;

use super::byrule::ByRuleExpander;
use super::limit::{Window, limit};
use super::seed::seed;
use super::step::{advance, units_between};
use crate::rfc::ical::core::{DateList, DateValue, Frequency, RRule, Until, ValueKind};

/// Error during RRULE expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpansionError {
    /// The rule has no FREQ part.
    #[error("RRULE has no FREQ")]
    MissingFrequency,
}

/// Anchor, window and output kind for one expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// First instance of the series (DTSTART). Without it nothing expands.
    pub anchor: Option<DateValue>,
    /// Inclusive lower bound of the window.
    pub period_start: DateValue,
    /// Inclusive upper bound of the window.
    pub period_end: Option<DateValue>,
    /// Kind of the returned values.
    pub kind: ValueKind,
}

impl ExpansionOptions {
    /// Creates options whose output kind follows the anchor, or the period
    /// start when there is no anchor.
    #[must_use]
    pub fn new(
        anchor: impl Into<Option<DateValue>>,
        period_start: DateValue,
        period_end: impl Into<Option<DateValue>>,
    ) -> Self {
        let anchor = anchor.into();
        Self {
            anchor,
            period_start,
            period_end: period_end.into(),
            kind: anchor.unwrap_or(period_start).kind(),
        }
    }

    /// Creates options anchored at the period start.
    #[must_use]
    pub fn from_period_start(
        period_start: DateValue,
        period_end: impl Into<Option<DateValue>>,
    ) -> Self {
        Self::new(period_start, period_start, period_end)
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }
}

/// ## Summary
/// Expands `rule` into its occurrences inside the requested window.
///
/// Occurrences are returned in pipeline order: chronological across
/// periods, and in BY* list order within a period. Duplicates are kept.
/// A missing anchor, or a request bounded by neither UNTIL nor a period
/// end, yields an empty list.
///
/// ## Errors
/// Returns `ExpansionError::MissingFrequency` if the rule has no FREQ.
pub fn expand_rrule(rule: &RRule, options: &ExpansionOptions) -> Result<DateList, ExpansionError> {
    let freq = rule.freq().ok_or(ExpansionError::MissingFrequency)?;
    let mut dates = DateList::new(options.kind);

    let Some(anchor) = options.anchor.as_ref().map(DateValue::instant) else {
        tracing::debug!(rule = %rule, "No anchor date; nothing to expand");
        return Ok(dates);
    };

    let period_start = options.period_start.instant();
    let period_end = options.period_end.as_ref().map(DateValue::instant);
    let until = rule.until().as_ref().map(Until::instant);

    tracing::debug!(
        rule = %rule,
        anchor = %anchor,
        period_start = %period_start,
        period_end = ?period_end,
        "Expanding RRULE"
    );

    let bound = match (until, period_end) {
        (Some(until), Some(end)) => until.min(end),
        (Some(until), None) => until,
        (None, Some(end)) => end,
        (None, None) => {
            tracing::warn!(rule = %rule, "RRULE has no UNTIL and no period end; refusing to expand");
            return Ok(dates);
        }
    };

    let expander = ByRuleExpander::new(rule, freq);
    let base = lattice(rule, freq, anchor, period_start, bound);
    tracing::trace!(count = base.len(), "Dates after FREQ/INTERVAL processing");

    let candidates = expander.expand(base);
    let window = Window {
        anchor,
        start: period_start,
        end: period_end,
        until,
    };
    let occurrences = limit(candidates, rule.count(), &window);

    dates.extend(occurrences.into_iter().map(DateValue::DateTime));
    tracing::debug!(count = dates.len(), "Expanded RRULE");

    Ok(dates)
}

/// Lattice instants `anchor + n * interval` units covering the window.
///
/// The first instant past `bound` is included as well: its period can start
/// before the bound even though the instant itself does not.
fn lattice(
    rule: &RRule,
    freq: Frequency,
    anchor: NaiveDateTime,
    period_start: NaiveDateTime,
    bound: NaiveDateTime,
) -> Vec<NaiveDateTime> {
    let interval = rule.interval();
    let first = if rule.count().is_some() {
        0
    } else {
        seed(rule, freq, anchor, period_start).map_or(0, |seed| {
            (units_between(anchor, seed, freq) / i64::from(interval) - 1).max(0)
        })
    };

    let mut instants = Vec::new();
    for n in first.. {
        let Some(units) = u32::try_from(n).ok().and_then(|n| n.checked_mul(interval)) else {
            break;
        };
        let Some(instant) = advance(anchor, freq, units) else {
            break;
        };
        instants.push(instant);
        if instant > bound {
            break;
        }
    }

    instants
}

impl RRule {
    /// ## Summary
    /// Expands this rule; see [`expand_rrule`].
    ///
    /// ## Errors
    /// Returns `ExpansionError::MissingFrequency` if the rule has no FREQ.
    pub fn dates(&self, options: &ExpansionOptions) -> Result<DateList, ExpansionError> {
        expand_rrule(self, options)
    }
}
