//! Selection controller: orchestrates geometry and validation per event

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rb_core::window::to_datetime;
use rb_core::{clip_intervals, now_marker, selection_conflicts, MappedInterval, TimestampMs};

use crate::config::SelectionConfig;

/// Outcome of one live update event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the candidate selection conflicts with any blocked interval
    pub error: bool,

    /// The selection converted to calendar timestamps
    pub time: (DateTime<Utc>, DateTime<Utc>),
}

/// Trait for components that need to respond to selection events
pub trait SelectionObserver: Send + Sync {
    /// Called once per committed change
    fn on_change(&self, selected: (DateTime<Utc>, DateTime<Utc>));

    /// Called once per live update, with the validation outcome
    fn on_update(&self, result: &ValidationResult);
}

/// The selection controller.
///
/// Holds an immutable configuration snapshot and a weak observer list; all
/// selection state lives in the caller and is passed in fresh on every
/// event. Geometry is re-derived per call rather than cached, so the output
/// always reflects the inputs of the current event.
pub struct SelectionController {
    config: SelectionConfig,
    observers: Arc<RwLock<Vec<Weak<dyn SelectionObserver>>>>,
}

impl SelectionController {
    /// Create a controller over a validated configuration
    pub fn new(config: SelectionConfig) -> Self {
        debug!(
            blocked = config.blocked.len(),
            show_now = config.show_now,
            "creating selection controller"
        );

        Self {
            config,
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The configuration this controller was built with
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Add an observer
    pub fn subscribe(&self, observer: Arc<dyn SelectionObserver>) {
        self.observers.write().push(Arc::downgrade(&observer));
    }

    /// Clipped blocked-track geometry for the current window.
    ///
    /// `None` when no blocked intervals were configured.
    pub fn blocked_geometry(&self) -> Option<Vec<MappedInterval>> {
        clip_intervals(&self.config.window, &self.config.blocked)
    }

    /// The now marker for the given clock reading, unless disabled
    pub fn now_marker(&self, clock_now: TimestampMs) -> Option<MappedInterval> {
        self.config
            .show_now
            .then(|| now_marker(&self.config.window, clock_now))
    }

    /// Handle a committed change: convert and hand the pair to observers.
    ///
    /// No validation happens here; conflicts are reported on update events.
    pub fn change(&self, raw: [TimestampMs; 2]) -> (DateTime<Utc>, DateTime<Utc>) {
        let selected = (to_datetime(raw[0]), to_datetime(raw[1]));
        debug!(start = raw[0], end = raw[1], "selection committed");

        for observer in self.live_observers() {
            observer.on_change(selected);
        }
        selected
    }

    /// Handle a live update: re-derive blocked geometry, validate the
    /// candidate selection against every track, and emit exactly one result.
    pub fn update(&self, raw: [TimestampMs; 2]) -> ValidationResult {
        let [start, end] = raw;
        let error = match self.blocked_geometry() {
            Some(tracks) => selection_conflicts((start, end), &tracks),
            None => false,
        };

        let result = ValidationResult {
            error,
            time: (to_datetime(start), to_datetime(end)),
        };
        debug!(start, end, error, "selection update");

        for observer in self.live_observers() {
            observer.on_update(&result);
        }
        result
    }

    /// Upgrade live observers, dropping dead weak references
    fn live_observers(&self) -> Vec<Arc<dyn SelectionObserver>> {
        let mut observers = self.observers.write();
        observers.retain(|weak| weak.strong_count() > 0);
        observers.iter().filter_map(Weak::upgrade).collect()
    }
}
