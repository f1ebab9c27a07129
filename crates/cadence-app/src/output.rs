//! Rendering of expanded occurrences.

use anyhow::Result;
use cadence_core::config::OutputFormat;
use cadence_rfc::rfc::ical::DateList;

/// ## Summary
/// Renders occurrences as iCalendar literals, one per line, or as a JSON
/// array of literals.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(dates: &DateList, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => dates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string(&**dates)?,
    })
}
