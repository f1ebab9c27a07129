//! Hand-checked expansions, mostly the worked examples of RFC 5545 §3.8.5.3.

use super::helpers::{ExpansionCase, assert_case};

#[expect(clippy::too_many_lines)]
fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "daily_count_date",
            rule: "FREQ=DAILY;COUNT=3",
            anchor: "20200101",
            start: None,
            end: Some("20201231"),
            expected: Some(&["20200101", "20200102", "20200103"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_byday_until",
            rule: "FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20200131",
            anchor: "20200101",
            start: None,
            end: None,
            expected: Some(&[
                "20200101", "20200103", "20200106", "20200108", "20200110", "20200113",
                "20200115", "20200117", "20200120", "20200122", "20200124", "20200127",
                "20200129", "20200131",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_last_friday",
            rule: "FREQ=MONTHLY;BYDAY=-1FR",
            anchor: "20200101",
            start: None,
            end: Some("20200331"),
            expected: Some(&["20200131", "20200228", "20200327"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "yearly_first_of_months_setpos",
            rule: "FREQ=YEARLY;BYMONTH=1,2;BYSETPOS=1",
            anchor: "20200101",
            start: None,
            end: Some("20211231"),
            expected: Some(&["20200101", "20210101"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "biweekly_mwf_until",
            rule: "FREQ=WEEKLY;INTERVAL=2;UNTIL=19971224T000000Z;WKST=SU;BYDAY=MO,WE,FR",
            anchor: "19970901T090000",
            start: None,
            end: None,
            expected: Some(&[
                "19970901T090000", "19970903T090000", "19970905T090000", "19970915T090000",
                "19970917T090000", "19970919T090000", "19970929T090000", "19971001T090000",
                "19971003T090000", "19971013T090000", "19971015T090000", "19971017T090000",
                "19971027T090000", "19971029T090000", "19971031T090000", "19971110T090000",
                "19971112T090000", "19971114T090000", "19971124T090000", "19971126T090000",
                "19971128T090000", "19971208T090000", "19971210T090000", "19971212T090000",
                "19971222T090000",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_first_friday_count",
            rule: "FREQ=MONTHLY;COUNT=10;BYDAY=1FR",
            anchor: "19970905T090000",
            start: None,
            end: Some("19991231T000000"),
            expected: Some(&[
                "19970905T090000", "19971003T090000", "19971107T090000", "19971205T090000",
                "19980102T090000", "19980206T090000", "19980306T090000", "19980403T090000",
                "19980501T090000", "19980605T090000",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_second_to_last_monday",
            rule: "FREQ=MONTHLY;COUNT=6;BYDAY=-2MO",
            anchor: "19970922T090000",
            start: None,
            end: Some("19991231T000000"),
            expected: Some(&[
                "19970922T090000", "19971020T090000", "19971117T090000", "19971222T090000",
                "19980119T090000", "19980216T090000",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_setpos_in_produced_order",
            rule: "FREQ=MONTHLY;COUNT=3;BYDAY=TU,WE,TH;BYSETPOS=3",
            anchor: "19970904T090000",
            start: None,
            end: Some("19991231T000000"),
            expected: Some(&["19970916T090000", "19971021T090000", "19971118T090000"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "yearly_june_july",
            rule: "FREQ=YEARLY;COUNT=10;BYMONTH=6,7",
            anchor: "19970610T090000",
            start: None,
            end: Some("20051231T000000"),
            expected: Some(&[
                "19970610T090000", "19970710T090000", "19980610T090000", "19980710T090000",
                "19990610T090000", "19990710T090000", "20000610T090000", "20000710T090000",
                "20010610T090000", "20010710T090000",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "every_third_year_by_yearday",
            rule: "FREQ=YEARLY;INTERVAL=3;COUNT=10;BYYEARDAY=1,100,200",
            anchor: "19970101T090000",
            start: None,
            end: Some("20101231T000000"),
            expected: Some(&[
                "19970101T090000", "19970410T090000", "19970719T090000", "20000101T090000",
                "20000409T090000", "20000718T090000", "20030101T090000", "20030410T090000",
                "20030719T090000", "20060101T090000",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monday_of_week_twenty",
            rule: "FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO",
            anchor: "19970512T090000",
            start: None,
            end: Some("19991231T000000"),
            expected: Some(&["19970512T090000", "19980511T090000", "19990517T090000"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "every_twenty_minutes_office_hours",
            rule: "FREQ=DAILY;BYHOUR=9,10,11,12,13,14,15,16;BYMINUTE=0,20,40",
            anchor: "19970902T090000",
            start: None,
            end: Some("19970902T235959"),
            expected: None,
            expected_len: Some(24),
        },
        ExpansionCase {
            name: "every_day_in_january",
            rule: "FREQ=YEARLY;UNTIL=20000131T140000Z;BYMONTH=1;BYDAY=SU,MO,TU,WE,TH,FR,SA",
            anchor: "19980101T090000",
            start: None,
            end: None,
            expected: None,
            expected_len: Some(93),
        },
        ExpansionCase {
            name: "last_day_of_month",
            rule: "FREQ=MONTHLY;BYMONTHDAY=-1",
            anchor: "20210101",
            start: None,
            end: Some("20210430"),
            expected: Some(&["20210131", "20210228", "20210331", "20210430"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_from_month_end",
            rule: "FREQ=MONTHLY",
            anchor: "20210131",
            start: None,
            end: Some("20210430"),
            expected: Some(&["20210131", "20210228", "20210331", "20210430"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "window_inside_series",
            rule: "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU",
            anchor: "20200107",
            start: Some("20200301"),
            end: Some("20200331"),
            expected: Some(&["20200303", "20200317", "20200331"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "count_spent_before_window",
            rule: "FREQ=DAILY;COUNT=3",
            anchor: "20200101",
            start: Some("20200201"),
            end: Some("20200301"),
            expected: Some(&[]),
            expected_len: None,
        },
    ]
}

#[test_log::test]
fn expansion_cases_match() {
    for case in expansion_cases() {
        assert_case(&case);
    }
}
