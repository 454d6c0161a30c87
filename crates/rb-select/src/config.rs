//! Configuration for the selection controller

use std::sync::Arc;

use rb_core::window::{hour_floor, to_datetime, TimestampMs, MS_PER_HOUR, MS_PER_MINUTE};
use rb_core::{BlockedInterval, TimelineWindow};

/// Formats a tick timestamp for display.
///
/// Consumed by the external tick renderer, not by the math in this crate.
pub type TickFormatter = Arc<dyn Fn(TimestampMs) -> String + Send + Sync>;

/// Configuration for a selection controller.
///
/// Defaults are applied once at construction via [`SelectionConfig::default_at`]
/// and never re-derived per event. `step_ms` and `ticks_number` are
/// pass-throughs for the external drag and tick-generation collaborators;
/// the geometry here never reads them.
#[derive(Clone)]
pub struct SelectionConfig {
    /// The timeline window all geometry is computed against
    pub window: TimelineWindow,

    /// Initial selected interval handed to the drag layer
    pub selected: (TimestampMs, TimestampMs),

    /// Blocked intervals, in the order the caller wants tracks keyed
    pub blocked: Vec<BlockedInterval>,

    /// Drag snap step in milliseconds (pass-through)
    pub step_ms: i64,

    /// Number of ticks the external tick generator should draw (pass-through)
    pub ticks_number: u32,

    /// Whether the now marker is derived at all
    pub show_now: bool,

    /// Tick label formatter (pass-through)
    pub format_tick: TickFormatter,
}

impl SelectionConfig {
    /// Default configuration for the instant `now`: the enclosing UTC day as
    /// the window, the current hour as the selection, a 30-minute step, and
    /// 48 ticks.
    ///
    /// The clock reading is supplied by the caller and used for every
    /// derived default, so one sample drives the whole configuration.
    pub fn default_at(now: TimestampMs) -> Self {
        let hour_start = hour_floor(now);

        Self {
            window: TimelineWindow::day_of(now),
            selected: (hour_start, hour_start + MS_PER_HOUR),
            blocked: Vec::new(),
            step_ms: 30 * MS_PER_MINUTE,
            ticks_number: 48,
            show_now: true,
            format_tick: default_tick_formatter(),
        }
    }
}

/// The default tick label: UTC wall-clock `HH:MM`
pub fn default_tick_formatter() -> TickFormatter {
    Arc::new(|instant| to_datetime(instant).format("%H:%M").to_string())
}
