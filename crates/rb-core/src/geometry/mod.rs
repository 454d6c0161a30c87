//! Percent-of-window geometry for the timeline
//!
//! Everything the presentation layer draws (blocked tracks, the now marker,
//! handle positions) is expressed as a percent position along the window.
//! These modules derive that geometry; they never render anything.

mod clip;
mod mapping;
mod now;

pub use clip::{clip_intervals, BlockedInterval, MappedInterval, BLOCKED_TRACK_PREFIX};
pub use mapping::{map_point, MappedPoint};
pub use now::{now_marker, NOW_TRACK_ID};
