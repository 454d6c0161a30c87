//! The timeline window: the absolute span of time the control visualizes

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::GeometryError;

/// Absolute point in time, milliseconds since the Unix epoch
pub type TimestampMs = i64;

/// Milliseconds in one UTC calendar day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one hour
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60_000;

/// The start/end instants the control visualizes.
///
/// This is the coordinate domain for all percent mapping: a valid window is
/// strictly non-empty (`start < end`), which every downstream computation
/// relies on. Construction is the single place that invariant is checked, so
/// a degenerate window fails at configuration time instead of producing
/// garbage percentages per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    start: TimestampMs,
    end: TimestampMs,
}

impl TimelineWindow {
    /// Create a window from millisecond timestamps
    pub fn new(start: TimestampMs, end: TimestampMs) -> Result<Self, GeometryError> {
        if end <= start {
            return Err(GeometryError::DegenerateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a window from calendar timestamps
    pub fn from_datetimes(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, GeometryError> {
        Self::new(start.timestamp_millis(), end.timestamp_millis())
    }

    /// The UTC calendar day containing `instant`
    pub fn day_of(instant: TimestampMs) -> Self {
        let start = instant - instant.rem_euclid(MS_PER_DAY);
        // A full day is never degenerate
        Self {
            start,
            end: start + MS_PER_DAY,
        }
    }

    /// Window start in milliseconds
    pub fn start(&self) -> TimestampMs {
        self.start
    }

    /// Window end in milliseconds
    pub fn end(&self) -> TimestampMs {
        self.end
    }

    /// Window length in milliseconds (always positive)
    pub fn length_ms(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `instant` lies within the window (inclusive of both ends)
    pub fn contains(&self, instant: TimestampMs) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Truncate `instant` to lie within the window
    pub fn clamp(&self, instant: TimestampMs) -> TimestampMs {
        instant.clamp(self.start, self.end)
    }
}

/// Top of the hour containing `instant` (UTC)
pub fn hour_floor(instant: TimestampMs) -> TimestampMs {
    instant - instant.rem_euclid(MS_PER_HOUR)
}

/// Convert a millisecond timestamp to a calendar timestamp.
///
/// Falls back to the epoch for values outside chrono's representable range,
/// which cannot occur for timestamps drawn from a valid window.
pub fn to_datetime(instant: TimestampMs) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(instant).unwrap_or_default()
}
