//! Cadence RRULE expansion - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cadence_test::component::` paths.

pub mod component {
    pub mod config {
        pub use cadence_core::config::*;
    }

    pub mod ical {
        pub use cadence_rfc::rfc::ical::*;
    }

    pub use cadence_rfc::{RfcError, RfcResult, expand_str};
}
