//! RRULE parsing error types.

use std::fmt;

/// Result type for RRULE parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for RRULE and date literal parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The offending token, verbatim.
    pub token: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.token)
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Rule part without a `=` separator.
    InvalidRRule,
    /// Unknown FREQ value.
    InvalidFrequency,
    /// Unknown weekday token in BYDAY or WKST.
    InvalidWeekday,
    /// Malformed integer in COUNT, INTERVAL or a BY* list.
    InvalidInteger,
    /// Integer outside the range allowed for its rule part.
    OutOfRange,
    /// UNTIL is neither a DATE nor a DATE-TIME.
    InvalidUntil,
    /// Invalid date format.
    InvalidDate,
    /// Invalid date-time format.
    InvalidDateTime,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRRule => write!(f, "invalid recurrence rule part"),
            Self::InvalidFrequency => write!(f, "invalid frequency"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::InvalidInteger => write!(f, "invalid integer"),
            Self::OutOfRange => write!(f, "value out of range"),
            Self::InvalidUntil => write!(f, "invalid UNTIL value"),
            Self::InvalidDate => write!(f, "invalid date format"),
            Self::InvalidDateTime => write!(f, "invalid date-time format"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
