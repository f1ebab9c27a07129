//! RRULE text and date literal parsing (RFC 5545 §3.3.4, §3.3.5, §3.3.10).

mod error;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use values::{parse_date, parse_date_value, parse_datetime, parse_rrule, parse_until};
