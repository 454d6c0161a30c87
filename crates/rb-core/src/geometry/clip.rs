//! Clipping blocked intervals to the visible window

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::mapping::{map_point, MappedPoint};
use crate::window::{TimelineWindow, TimestampMs};

/// Render-key prefix for clipped blocked tracks
pub const BLOCKED_TRACK_PREFIX: &str = "blocked-track";

const BLOCKED_START_PREFIX: &str = "blocked-start";
const BLOCKED_END_PREFIX: &str = "blocked-end";

/// A sub-range of the timeline the user may not select.
///
/// Supplied by the caller per render and may lie partially or fully outside
/// the window; [`clip_intervals`] truncates it before any geometry is
/// derived. `start <= end` is enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedInterval {
    id: String,
    start: TimestampMs,
    end: TimestampMs,
}

impl BlockedInterval {
    /// Create a blocked interval, rejecting `end < start`
    pub fn new(
        id: impl Into<String>,
        start: TimestampMs,
        end: TimestampMs,
    ) -> Result<Self, GeometryError> {
        let id = id.into();
        if end < start {
            return Err(GeometryError::InvalidInterval { id, start, end });
        }
        Ok(Self { id, start, end })
    }

    /// Caller-supplied identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Interval start in milliseconds
    pub fn start(&self) -> TimestampMs {
        self.start
    }

    /// Interval end in milliseconds
    pub fn end(&self) -> TimestampMs {
        self.end
    }
}

/// A blocked interval clipped to the window and mapped into percent space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedInterval {
    /// Render key, stable across renders for the same input ordering
    pub id: String,

    /// Mapped (clipped) interval start
    pub source: MappedPoint,

    /// Mapped (clipped) interval end
    pub target: MappedPoint,
}

/// Clip each blocked interval to the window and map its endpoints.
///
/// Returns `None` for an empty input list so "no intervals supplied" stays
/// distinguishable from a list of (possibly zero-width) tracks. Output order
/// matches input order; ids are `"blocked-track-{index}"` over the input
/// positions, so the caller must keep its ordering stable across renders.
/// Intervals fully outside the window collapse to a zero-width track pinned
/// at percent 0 or 100, which is a valid output rather than an error.
pub fn clip_intervals(
    window: &TimelineWindow,
    blocked: &[BlockedInterval],
) -> Option<Vec<MappedInterval>> {
    if blocked.is_empty() {
        return None;
    }

    let tracks = blocked
        .iter()
        .enumerate()
        .map(|(index, interval)| {
            let start = window.clamp(interval.start());
            let end = window.clamp(interval.end());

            MappedInterval {
                id: format!("{}-{}", BLOCKED_TRACK_PREFIX, index),
                source: map_point(window, start, BLOCKED_START_PREFIX),
                target: map_point(window, end, BLOCKED_END_PREFIX),
            }
        })
        .collect();

    Some(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_START: TimestampMs = 1_704_067_200_000; // 2024-01-01T00:00:00Z
    const HOUR: i64 = 3_600_000;

    fn day_window() -> TimelineWindow {
        TimelineWindow::day_of(DAY_START)
    }

    fn blocked(start: TimestampMs, end: TimestampMs) -> BlockedInterval {
        BlockedInterval::new("maintenance", start, end).unwrap()
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let err = BlockedInterval::new("bad", 10, 5).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidInterval {
                id: "bad".to_string(),
                start: 10,
                end: 5,
            }
        );
        // Zero width is allowed
        assert!(BlockedInterval::new("point", 10, 10).is_ok());
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(clip_intervals(&day_window(), &[]).is_none());
    }

    #[test]
    fn test_inside_interval_unchanged() {
        let window = day_window();
        let tracks =
            clip_intervals(&window, &[blocked(DAY_START + 10 * HOUR, DAY_START + 11 * HOUR)])
                .unwrap();

        assert_eq!(tracks[0].source.value, DAY_START + 10 * HOUR);
        assert_eq!(tracks[0].target.value, DAY_START + 11 * HOUR);
    }

    #[test]
    fn test_clip_start_before_window() {
        let window = day_window();
        // Starts the previous evening, ends at 10:00
        let tracks =
            clip_intervals(&window, &[blocked(DAY_START - HOUR, DAY_START + 10 * HOUR)]).unwrap();

        assert_eq!(tracks[0].source.percent, 0.0);
        assert!((tracks[0].target.percent - 41.67).abs() < 0.01);
    }

    #[test]
    fn test_clip_end_after_window() {
        let window = day_window();
        let tracks =
            clip_intervals(&window, &[blocked(DAY_START + 23 * HOUR, DAY_START + 30 * HOUR)])
                .unwrap();

        assert_eq!(tracks[0].source.value, DAY_START + 23 * HOUR);
        assert_eq!(tracks[0].target.percent, 100.0);
    }

    #[test]
    fn test_fully_outside_collapses_to_boundary() {
        let window = day_window();
        let before = clip_intervals(&window, &[blocked(DAY_START - 2 * HOUR, DAY_START - HOUR)])
            .unwrap();
        let after = clip_intervals(
            &window,
            &[blocked(DAY_START + 30 * HOUR, DAY_START + 31 * HOUR)],
        )
        .unwrap();

        assert_eq!(before[0].source.percent, 0.0);
        assert_eq!(before[0].target.percent, 0.0);
        assert_eq!(after[0].source.percent, 100.0);
        assert_eq!(after[0].target.percent, 100.0);
    }

    #[test]
    fn test_percents_bounded_after_clipping() {
        let window = day_window();
        let inputs = [
            blocked(DAY_START - 5 * HOUR, DAY_START + 2 * HOUR),
            blocked(DAY_START + 4 * HOUR, DAY_START + 40 * HOUR),
            blocked(DAY_START - 10 * HOUR, DAY_START - 9 * HOUR),
        ];
        let tracks = clip_intervals(&window, &inputs).unwrap();

        for track in &tracks {
            assert!((0.0..=100.0).contains(&track.source.percent));
            assert!((0.0..=100.0).contains(&track.target.percent));
            assert!(track.source.value <= track.target.value);
        }
    }

    #[test]
    fn test_order_and_ids_follow_input() {
        let window = day_window();
        let inputs = [
            blocked(DAY_START + 3 * HOUR, DAY_START + 4 * HOUR),
            blocked(DAY_START + HOUR, DAY_START + 2 * HOUR), // earlier, listed second
        ];
        let tracks = clip_intervals(&window, &inputs).unwrap();

        assert_eq!(tracks[0].id, "blocked-track-0");
        assert_eq!(tracks[1].id, "blocked-track-1");
        assert!(tracks[0].source.value > tracks[1].source.value);
    }

    #[test]
    fn test_endpoint_prefixes_distinct() {
        let window = day_window();
        let at = DAY_START + 6 * HOUR;
        let tracks = clip_intervals(&window, &[blocked(at, at)]).unwrap();

        // Same millisecond, but start/end never collide
        assert_ne!(tracks[0].source.id, tracks[0].target.id);
    }
}
