//! The "now" marker: a one-minute synthetic interval at the current instant

use crate::geometry::clip::MappedInterval;
use crate::geometry::mapping::map_point;
use crate::window::{TimelineWindow, TimestampMs, MS_PER_MINUTE};

/// Render key of the now marker; only one exists at a time
pub const NOW_TRACK_ID: &str = "now-track";

/// Build the now marker for `clock_now`.
///
/// The clock reading is sampled once by the caller and threaded through, so
/// repeated computations over the same reading stay bit-identical. No
/// clipping is applied: a reading outside the window maps outside [0, 100]
/// and the presentation layer decides whether to draw it.
pub fn now_marker(window: &TimelineWindow, clock_now: TimestampMs) -> MappedInterval {
    MappedInterval {
        id: NOW_TRACK_ID.to_string(),
        source: map_point(window, clock_now, "now-start"),
        target: map_point(window, clock_now + MS_PER_MINUTE, "now-end"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_START: TimestampMs = 1_704_067_200_000; // 2024-01-01T00:00:00Z

    #[test]
    fn test_marker_at_noon() {
        let window = TimelineWindow::day_of(DAY_START);
        let marker = now_marker(&window, DAY_START + 43_200_000);

        assert_eq!(marker.id, NOW_TRACK_ID);
        assert_eq!(marker.source.percent, 50.0);
        assert!((marker.target.percent - 50.069).abs() < 0.01);
    }

    #[test]
    fn test_marker_is_one_minute_wide() {
        let window = TimelineWindow::day_of(DAY_START);
        let marker = now_marker(&window, DAY_START + 1_000);

        assert_eq!(marker.target.value - marker.source.value, MS_PER_MINUTE);
    }

    #[test]
    fn test_marker_outside_window_unclipped() {
        let window = TimelineWindow::day_of(DAY_START);
        let marker = now_marker(&window, DAY_START - 7_200_000);

        assert!(marker.source.percent < 0.0);
    }
}
