//! Invariants that hold for any rule and window.

use chrono::TimeDelta;

use super::helpers::{expand, expand_instants, options, value};
use cadence_test::component::expand_str;
use cadence_test::component::ical::expand::ExpansionOptions;
use cadence_test::component::ical::{RRule, ValueKind};

const RULES: &[&str] = &[
    "FREQ=DAILY;INTERVAL=3",
    "FREQ=WEEKLY;BYDAY=MO,FR",
    "FREQ=WEEKLY;INTERVAL=2;BYDAY=SU,TH",
    "FREQ=MONTHLY;BYDAY=-1FR",
    "FREQ=MONTHLY;BYMONTHDAY=31",
    "FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=29",
    "FREQ=YEARLY;BYWEEKNO=1,-1;BYDAY=MO",
    "FREQ=HOURLY;INTERVAL=7;BYMINUTE=15",
    "FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=1,-1",
];

const ANCHOR: &str = "20190315T093000";

#[test]
fn occurrences_stay_inside_window() {
    let start = value("20200101T000000").instant();
    let end = value("20201231T235959").instant();

    for rule in RULES {
        let dates = expand_instants(rule, &options(ANCHOR, Some("20200101T000000"), Some("20201231T235959")));
        assert!(!dates.is_empty(), "Rule {rule} produced nothing");
        assert!(
            dates.iter().all(|d| *d >= start && *d <= end),
            "Rule {rule} left the window"
        );
    }
}

#[test]
fn adjacent_windows_concatenate() {
    for rule in RULES {
        let whole = expand(rule, &options(ANCHOR, Some("20200101T000000"), Some("20201231T235959")));
        let mut paged = expand(rule, &options(ANCHOR, Some("20200101T000000"), Some("20200630T235959")));
        paged.extend(expand(rule, &options(ANCHOR, Some("20200701T000000"), Some("20201231T235959"))));

        assert_eq!(whole, paged, "Rule {rule} differs when paged");
    }
}

#[test]
fn nothing_precedes_anchor() {
    let anchor = value(ANCHOR).instant();
    for rule in RULES {
        let dates = expand_instants(rule, &options(ANCHOR, Some("20190101T000000"), Some("20190630T000000")));
        assert!(dates.iter().all(|d| *d >= anchor), "Rule {rule} preceded its anchor");
    }
}

#[test]
fn count_bounds_the_series() {
    for rule in RULES {
        let counted = format!("{rule};COUNT=7");
        let dates = expand(&counted, &options(ANCHOR, None, Some("20491231T000000")));
        // Candidates before the anchor consume COUNT too.
        assert!((1..=7).contains(&dates.len()), "Rule {counted} did not honour COUNT");
    }
}

#[test]
fn until_bounds_the_series() {
    let until = value("20190601T000000").instant();
    for rule in RULES {
        let bounded = format!("{rule};UNTIL=20190601T000000");
        let dates = expand_instants(&bounded, &options(ANCHOR, None, None));
        assert!(dates.iter().all(|d| *d <= until), "Rule {bounded} passed UNTIL");
    }
}

#[test]
fn date_kind_output_is_uniform() {
    for rule in RULES {
        let options = options(ANCHOR, None, Some("20191231T000000")).with_kind(ValueKind::Date);
        let dates = expand_str(rule, &options).unwrap();
        assert_eq!(dates.kind(), ValueKind::Date);
        assert!(dates.iter().all(|d| d.kind() == ValueKind::Date));
    }
}

#[test]
fn serialized_rule_expands_identically() {
    let options = options(ANCHOR, None, Some("20201231T000000"));
    for rule in RULES {
        let parsed: RRule = rule.parse().unwrap();
        let reparsed: RRule = parsed.to_string().parse().unwrap();
        assert_eq!(parsed.dates(&options).unwrap(), reparsed.dates(&options).unwrap());
    }
}

#[test]
fn stepping_one_second_past_an_occurrence_drops_it() {
    for rule in RULES {
        let dates = expand_instants(rule, &options(ANCHOR, None, Some("20191231T000000")));
        let Some(first) = dates.first().copied() else {
            continue;
        };
        let later = ExpansionOptions::new(
            value(ANCHOR),
            (first + TimeDelta::seconds(1)).into(),
            value("20191231T000000"),
        );
        let rest = expand_instants(rule, &later);
        assert!(!rest.contains(&first), "Rule {rule} kept an occurrence before the window");
    }
}
