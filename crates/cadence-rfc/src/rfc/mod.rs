//! Internet calendaring standards supported by this crate.

pub mod ical;
