//! Derives one day's selection geometry and prints it as JSON.
//!
//! Stands in for a rendering layer: builds a config with two blocked
//! intervals, drives a couple of update events, and dumps what a renderer
//! would consume.

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use rb_core::window::{hour_floor, MS_PER_HOUR, MS_PER_MINUTE};
use rb_core::BlockedInterval;
use rb_select::{SelectionConfig, SelectionController};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // One clock sample drives the whole computation
    let now = Utc::now().timestamp_millis();
    let mut config = SelectionConfig::default_at(now);
    let day_start = config.window.start();

    config.blocked = vec![
        BlockedInterval::new(
            "standup",
            day_start + 9 * MS_PER_HOUR,
            day_start + 9 * MS_PER_HOUR + 30 * MS_PER_MINUTE,
        )?,
        BlockedInterval::new(
            "maintenance",
            day_start + 22 * MS_PER_HOUR,
            day_start + 26 * MS_PER_HOUR, // clipped to the window end
        )?,
    ];

    let controller = SelectionController::new(config);
    info!("derived geometry for the current UTC day");

    if let Some(tracks) = controller.blocked_geometry() {
        println!("blocked tracks:\n{}", serde_json::to_string_pretty(&tracks)?);
    }
    if let Some(marker) = controller.now_marker(now) {
        println!("now marker:\n{}", serde_json::to_string_pretty(&marker)?);
    }

    // A live drag lands on the current hour, then inside the standup
    let hour = hour_floor(now);
    for candidate in [
        [hour, hour + MS_PER_HOUR],
        [
            day_start + 9 * MS_PER_HOUR + 5 * MS_PER_MINUTE,
            day_start + 9 * MS_PER_HOUR + 20 * MS_PER_MINUTE,
        ],
    ] {
        let result = controller.update(candidate);
        println!(
            "update {} -> {}: error={}",
            result.time.0.format("%H:%M"),
            result.time.1.format("%H:%M"),
            result.error
        );
    }

    Ok(())
}
