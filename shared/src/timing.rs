use chrono::{Duration, NaiveDateTime};

use crate::{Result, SharedError};

/// Format of the timestamps the server renders into the contest page,
/// after separator normalization.
pub const PAGE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parse a timestamp string rendered into the page.
///
/// The server emits dates with `-` separators; those are rewritten to `/`
/// before parsing because not every date parser accepts both forms.
pub fn parse_page_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let normalized = raw.trim().replace('-', "/");
    NaiveDateTime::parse_from_str(&normalized, PAGE_TIMESTAMP_FORMAT).map_err(|e| {
        SharedError::InvalidTimestamp {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
    })
}

/// The `[start, end]` interval during which a contest runs.
///
/// Immutable for the session: sourced once from the rendered page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContestWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// What the countdown display shows for one tick. Recomputed every tick,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub remaining: Duration,
    pub elapsed_fraction: f64,
    pub ended: bool,
}

impl ContestWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Derive the display state for a given instant.
    ///
    /// The elapsed fraction is intentionally unclamped: a skewed client
    /// clock can push it below 0 or past 1, and a zero-length window
    /// divides by zero and yields a non-finite value. Callers render what
    /// they get; the ended flag is what terminates the loop.
    pub fn display_state(&self, now: NaiveDateTime) -> DisplayState {
        let remaining = self.end.signed_duration_since(now);
        let elapsed = now.signed_duration_since(self.start).num_milliseconds() as f64;
        let length = self.end.signed_duration_since(self.start).num_milliseconds() as f64;
        DisplayState {
            remaining,
            elapsed_fraction: elapsed / length,
            ended: now >= self.end,
        }
    }
}

/// Format remaining time as `HH:MM:SS`.
///
/// Components are peeled off by successive division/modulo 60, so hours
/// wrap at 60 the same way minutes and seconds do. Each component is
/// zero-padded to two digits when below 10. Negative durations clamp to
/// `00:00:00`; the running loop ends before one can be observed.
pub fn format_clock(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let seconds = total % 60;
    let minutes = (total / 60) % 60;
    let hours = (total / 3600) % 60;
    format!("{}:{}:{}", pad(hours), pad(minutes), pad(seconds))
}

/// CSS width for the progress timeline: the raw fraction scaled to percent.
pub fn timeline_width(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

fn pad(component: i64) -> String {
    if component < 10 {
        format!("0{}", component)
    } else {
        component.to_string()
    }
}
