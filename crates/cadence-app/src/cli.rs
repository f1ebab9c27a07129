//! Command-line arguments and their translation into expansion options.

use anyhow::{Context, Result};
use cadence_core::config::{OutputFormat, Settings};
use cadence_rfc::rfc::ical::expand::ExpansionOptions;
use cadence_rfc::rfc::ical::{DateValue, RRule, ValueKind};
use chrono::Days;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(about = "Expand an iCalendar RRULE into its occurrences")]
pub struct Args {
    /// Recurrence rule value, e.g. "FREQ=WEEKLY;BYDAY=MO,FR;COUNT=10"
    pub rule: RRule,

    /// First instance of the series (YYYYMMDD or YYYYMMDDTHHMMSS)
    #[arg(short, long)]
    pub anchor: DateValue,

    /// Start of the window; defaults to the anchor
    #[arg(short, long)]
    pub start: Option<DateValue>,

    /// End of the window; defaults to the configured window length
    #[arg(short, long)]
    pub end: Option<DateValue>,

    /// Print dates without a time of day
    #[arg(long)]
    pub date_only: bool,

    /// Print a JSON array instead of one date per line
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// ## Summary
    /// Builds expansion options, filling in the window end from
    /// `expansion.default_window_days` when neither `--end` nor UNTIL bounds
    /// the request.
    ///
    /// ## Errors
    /// Returns an error if the default window end is not a representable
    /// date.
    pub fn expansion_options(&self, settings: &Settings) -> Result<ExpansionOptions> {
        let start = self.start.unwrap_or(self.anchor);

        let end = match self.end {
            Some(end) => Some(end),
            None if self.rule.until().is_some() => None,
            None => {
                let days = u64::from(settings.expansion.default_window_days);
                tracing::debug!(days, "No window end given, using default window");
                Some(add_days(start, days).context("Default window end is out of range")?)
            }
        };

        let options = ExpansionOptions::new(self.anchor, start, end);
        Ok(if self.date_only {
            options.with_kind(ValueKind::Date)
        } else {
            options
        })
    }

    /// `--json` wins over the configured format.
    #[must_use]
    pub fn output_format(&self, settings: &Settings) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            settings.expansion.output
        }
    }
}

fn add_days(value: DateValue, days: u64) -> Option<DateValue> {
    match value {
        DateValue::Date(d) => d.checked_add_days(Days::new(days)).map(DateValue::Date),
        DateValue::DateTime(dt) => dt.checked_add_days(Days::new(days)).map(DateValue::DateTime),
    }
}
