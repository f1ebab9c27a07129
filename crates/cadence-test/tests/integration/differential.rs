//! Cross-checks against the `rrule` crate for rules where both engines
//! produce chronological, duplicate-free output and no month step has to
//! clamp its day.

use super::helpers::{expand_instants, options, oracle};

const RULES: &[(&str, &str)] = &[
    ("FREQ=DAILY;COUNT=10", "20120201T093000"),
    ("FREQ=DAILY;INTERVAL=3;COUNT=10", "20120201T093000"),
    ("FREQ=WEEKLY;COUNT=10;BYDAY=TU,TH", "19970902T090000"),
    ("FREQ=WEEKLY;INTERVAL=2;COUNT=8;BYDAY=MO,FR", "20200106T080000"),
    ("FREQ=MONTHLY;COUNT=6;BYDAY=-1FR", "20200101T090000"),
    ("FREQ=MONTHLY;COUNT=8;BYMONTHDAY=1,15", "20200101T090000"),
    ("FREQ=MONTHLY;COUNT=6;BYMONTHDAY=-1", "20200101T090000"),
    ("FREQ=MONTHLY;INTERVAL=2;COUNT=6", "20200115T090000"),
    ("FREQ=MONTHLY;COUNT=6;BYDAY=FR;BYSETPOS=-1", "20200101T170000"),
    ("FREQ=YEARLY;COUNT=5;BYMONTH=3;BYDAY=2SU", "20200101T020000"),
    ("FREQ=YEARLY;COUNT=6;BYYEARDAY=1,100,200", "20200101T090000"),
    ("FREQ=YEARLY;COUNT=4", "20200301T120000"),
    ("FREQ=DAILY;COUNT=6;BYHOUR=9,17", "20200101T090000"),
    ("FREQ=HOURLY;INTERVAL=5;COUNT=10;BYMINUTE=15,45", "20200101T001500"),
];

#[test_log::test]
fn matches_rrule_crate() {
    for (rule, anchor) in RULES {
        let expected = oracle(rule, anchor, 100);
        let actual = expand_instants(rule, &options(anchor, None, Some("20401231T235959")));

        assert_eq!(actual, expected, "Rule {rule} from {anchor} did not match");
    }
}
