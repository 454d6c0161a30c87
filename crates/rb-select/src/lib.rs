//! Selection orchestration over the timeline geometry core
//!
//! This crate is the surface an external presentation/drag layer talks to: a
//! configuration struct with documented defaults, and a controller that
//! re-derives blocked-track geometry, validates candidate selections, and
//! notifies observers on change and update events.

pub mod config;
pub mod controller;

// Re-export commonly used types
pub use config::{default_tick_formatter, SelectionConfig, TickFormatter};
pub use controller::{SelectionController, SelectionObserver, ValidationResult};
