//! Core geometry for a timeline range-selection control
//!
//! This crate turns a timeline window, a set of blocked intervals, and a
//! candidate selection into the normalized positions a rendering layer needs:
//! percent-of-window coordinates for blocked tracks and the now marker, plus
//! overlap validation for the selection. Everything here is a pure
//! computation over caller-supplied snapshots; rendering, drag capture, and
//! tick formatting live outside this crate.

pub mod error;
pub mod geometry;
pub mod validate;
pub mod window;

// Re-export commonly used types
pub use error::GeometryError;
pub use geometry::{
    clip_intervals, map_point, now_marker, BlockedInterval, MappedInterval, MappedPoint,
    NOW_TRACK_ID,
};
pub use validate::{overlaps, selection_conflicts, SelectionSpan};
pub use window::{to_datetime, TimelineWindow, TimestampMs};
