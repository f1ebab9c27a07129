//! RFC 5545 recurrence rules: the RRULE value model, its textual codec and
//! the occurrence expansion engine.

pub mod error;
pub mod rfc;

use cadence_core::error::CoreError;
use rfc::ical::expand::{ExpansionOptions, expand_rrule};
use rfc::ical::{DateList, parse::parse_rrule};

pub use error::{RfcError, RfcResult};

/// ## Summary
/// Parses an RRULE value and expands it in one call.
///
/// ## Errors
/// Returns an error if the rule text is blank or malformed, or the rule has
/// no FREQ.
pub fn expand_str(rule: &str, options: &ExpansionOptions) -> RfcResult<DateList> {
    if rule.trim().is_empty() {
        return Err(CoreError::InvalidInput("RRULE value is empty".to_string()).into());
    }

    let rrule = parse_rrule(rule)?;
    Ok(expand_rrule(&rrule, options)?)
}
