//! Mapping absolute timestamps into percent-of-window coordinates

use serde::{Deserialize, Serialize};

use crate::window::{TimelineWindow, TimestampMs};

/// A timestamp mapped into the window's coordinate space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedPoint {
    /// Render key, `"{prefix}-{value}"`
    pub id: String,

    /// Position along the window, 0 at the window start and 100 at the end.
    /// Unclamped: a point outside the window maps outside [0, 100].
    pub percent: f64,

    /// The source timestamp in milliseconds, used for numeric comparisons
    pub value: TimestampMs,
}

/// Map `point` to its percent position within `window`.
///
/// No clamping is performed here; callers that need bounded output clip the
/// point to the window first. The id is deterministic: two points mapped at
/// the same millisecond under the same prefix are interchangeable render
/// keys, so they may share an id.
pub fn map_point(window: &TimelineWindow, point: TimestampMs, id_prefix: &str) -> MappedPoint {
    let percent = (point - window.start()) as f64 / window.length_ms() as f64 * 100.0;

    MappedPoint {
        id: format!("{}-{}", id_prefix, point),
        percent,
        value: point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_window() -> TimelineWindow {
        // 2024-01-01T00:00:00Z, 24 hours
        TimelineWindow::day_of(1_704_110_400_000)
    }

    #[test]
    fn test_percent_endpoints() {
        let window = day_window();

        assert_eq!(map_point(&window, window.start(), "tick").percent, 0.0);
        assert_eq!(map_point(&window, window.end(), "tick").percent, 100.0);
    }

    #[test]
    fn test_percent_monotonic() {
        let window = day_window();
        let mut last = f64::NEG_INFINITY;

        for offset in [0, 1, 500, 60_000, 3_600_000, 43_200_000, 86_400_000] {
            let mapped = map_point(&window, window.start() + offset, "tick");
            assert!(mapped.percent > last);
            last = mapped.percent;
        }
    }

    #[test]
    fn test_outside_window_unclamped() {
        let window = day_window();

        assert!(map_point(&window, window.start() - 1_000, "tick").percent < 0.0);
        assert!(map_point(&window, window.end() + 1_000, "tick").percent > 100.0);
    }

    #[test]
    fn test_id_and_value() {
        let window = day_window();
        let mapped = map_point(&window, window.start() + 60_000, "now-start");

        assert_eq!(mapped.value, window.start() + 60_000);
        assert_eq!(mapped.id, format!("now-start-{}", window.start() + 60_000));
    }
}
