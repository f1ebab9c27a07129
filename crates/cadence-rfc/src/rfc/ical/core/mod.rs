//! iCalendar recurrence models (RFC 5545).
//!
//! These types are designed for:
//! - Round-trip fidelity: preserving unknown rule parts
//! - Deterministic serialization: fixed rule-part order
//! - Type safety: COUNT and UNTIL can never both be set

mod rrule;
mod value;

pub use rrule::{Frequency, RRule, RRuleBuilder, Termination, Until, Weekday, WeekdayNum};
pub use value::{DateList, DateValue, ValueKind};
