//! COUNT truncation and window trimming of expanded candidates.

use chrono::NaiveDateTime;

/// Bounds applied after the BY* pipeline. All bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub anchor: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
}

impl Window {
    #[must_use]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start.max(self.anchor)
            && self.end.is_none_or(|end| instant <= end)
            && self.until.is_none_or(|until| instant <= until)
    }
}

/// ## Summary
/// Limits pipeline output to the occurrences the caller asked for.
///
/// COUNT keeps the first `count` candidates in pipeline order, so
/// candidates before the window or the anchor still consume it. Anything
/// before the anchor, outside the window or past UNTIL is then dropped.
/// Duplicates are kept.
#[must_use]
pub fn limit(
    mut candidates: Vec<NaiveDateTime>,
    count: Option<u32>,
    window: &Window,
) -> Vec<NaiveDateTime> {
    if let Some(count) = count {
        candidates.truncate(usize::try_from(count).unwrap_or(usize::MAX));
    }

    candidates.retain(|candidate| window.contains(*candidate));
    candidates
}
