//! Overlap validation between a candidate selection and blocked tracks

use crate::geometry::MappedInterval;
use crate::window::TimestampMs;

/// The selection pair in milliseconds, `start <= end` guaranteed by the caller
pub type SelectionSpan = (TimestampMs, TimestampMs);

/// Whether `selection` conflicts with a single blocked track.
///
/// Boundary handling is asymmetric: a selection touching a blocked boundary
/// from the outside is allowed, while a blocked interval flush against the
/// selection's edge from the inside still conflicts. The four branches encode
/// that tie-break; collapsing them algebraically changes which selections get
/// flagged at exact boundary equality.
pub fn overlaps(selection: SelectionSpan, blocked: &MappedInterval) -> bool {
    let (start, end) = selection;
    let blocked_start = blocked.source.value;
    let blocked_end = blocked.target.value;

    // Blocked interval nested inside the selection, at least one side strict
    if (blocked_start > start && blocked_end <= end)
        || (blocked_start >= start && blocked_end < end)
    {
        return true;
    }

    // Selection fully contained in (or equal to) the blocked interval
    if start >= blocked_start && end <= blocked_end {
        return true;
    }

    // Selection starts strictly inside and extends past or to the blocked end
    if start > blocked_start && start < blocked_end && end >= blocked_end {
        return true;
    }

    // Selection ends strictly inside and starts at or before the blocked start
    if end < blocked_end && end > blocked_start && start <= blocked_start {
        return true;
    }

    false
}

/// Whether `selection` conflicts with any of the blocked tracks
pub fn selection_conflicts(selection: SelectionSpan, blocked: &[MappedInterval]) -> bool {
    blocked.iter().any(|track| overlaps(selection, track))
}
