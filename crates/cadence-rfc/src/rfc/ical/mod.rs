//! iCalendar recurrence support (RFC 5545 §3.3.10).
//!
//! - `core`: the RRULE value and the date values it produces
//! - `parse`: text to RRULE, and date literals
//! - `expand`: RRULE + anchor + window to an ordered occurrence list
//!
//! ```rust
//! use cadence_rfc::rfc::ical::expand::ExpansionOptions;
//! use cadence_rfc::rfc::ical::{DateValue, RRule};
//!
//! let rule: RRule = "FREQ=DAILY;COUNT=3".parse().unwrap();
//! let anchor: DateValue = "20200101".parse().unwrap();
//! let end: DateValue = "20201231".parse().unwrap();
//!
//! let dates = rule
//!     .dates(&ExpansionOptions::new(anchor, anchor, end))
//!     .unwrap();
//! assert_eq!(dates.len(), 3);
//! ```

pub mod core;
pub mod expand;
pub mod parse;


pub use self::core::{
    DateList, DateValue, Frequency, RRule, RRuleBuilder, Termination, Until, ValueKind, Weekday,
    WeekdayNum,
};
