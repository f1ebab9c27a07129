//! RRULE occurrence expansion.
//!
//! Expansion runs in four steps: locate the first period of the window
//! ([`seed`]), walk the anchor's frequency/interval lattice ([`step`]), run
//! the BY* pipeline over each period ([`byrule`]), then apply COUNT and the
//! window bounds ([`limit`]).

pub mod byday;
pub mod byrule;
pub mod calendar;
pub mod limit;
mod rrule;
pub mod seed;
pub mod step;

pub use rrule::{ExpansionError, ExpansionOptions, expand_rrule};
