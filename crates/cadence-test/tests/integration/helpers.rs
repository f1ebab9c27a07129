#![expect(clippy::expect_used)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Parsing date literals and building expansion options
//! - Expanding a rule through the public entry point
//! - Expanding the same rule with the `rrule` crate for comparison

use chrono::NaiveDateTime;
use rrule::RRuleSet;

use cadence_test::component::expand_str;
use cadence_test::component::ical::DateValue;
use cadence_test::component::ical::expand::ExpansionOptions;

pub use tracing;

/// One hand-checked expansion.
pub struct ExpansionCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub anchor: &'static str,
    pub start: Option<&'static str>,
    pub end: Option<&'static str>,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

pub fn value(s: &str) -> DateValue {
    s.parse()
        .unwrap_or_else(|err| panic!("Failed to parse date literal {s}: {err}"))
}

pub fn options(anchor: &str, start: Option<&str>, end: Option<&str>) -> ExpansionOptions {
    let anchor = value(anchor);
    ExpansionOptions::new(anchor, start.map_or(anchor, value), end.map(value))
}

/// Expands `rule` and returns the occurrences as iCalendar literals.
pub fn expand(rule: &str, options: &ExpansionOptions) -> Vec<String> {
    expand_str(rule, options)
        .unwrap_or_else(|err| panic!("Failed to expand {rule}: {err}"))
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Expands `rule` and returns the occurrences as instants.
pub fn expand_instants(rule: &str, options: &ExpansionOptions) -> Vec<NaiveDateTime> {
    expand_str(rule, options)
        .unwrap_or_else(|err| panic!("Failed to expand {rule}: {err}"))
        .iter()
        .map(DateValue::instant)
        .collect()
}

pub fn assert_case(case: &ExpansionCase) {
    tracing::debug!(case = case.name, rule = case.rule, "Checking expansion case");

    let actual = expand(case.rule, &options(case.anchor, case.start, case.end));

    if let Some(expected) = case.expected {
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

/// Expands `rule` from `anchor` with the `rrule` crate, as wall-clock
/// instants.
pub fn oracle(rule: &str, anchor: &str, limit: u16) -> Vec<NaiveDateTime> {
    let set: RRuleSet = format!("DTSTART:{anchor}Z\nRRULE:{rule}")
        .parse()
        .expect("rrule crate rejected rule");

    set.all(limit)
        .dates
        .iter()
        .map(chrono::DateTime::naive_utc)
        .collect()
}
