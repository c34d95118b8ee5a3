// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Schedule command printing video sample timestamps
// ABOUTME: Validates the duration and interval before building the schedule

use recipe_lens::config::LensConfig;
use recipe_lens::errors::{AppError, AppResult};
use recipe_lens::sampling::FrameSchedule;
use std::time::Duration;

/// Run the `schedule` command
pub fn run(config: &LensConfig, duration_secs: f64, interval_ms: Option<u64>) -> AppResult<()> {
    let duration = Duration::try_from_secs_f64(duration_secs).map_err(|e| {
        AppError::invalid_input(format!("invalid duration {duration_secs}s: {e}"))
    })?;
    let interval =
        Duration::from_millis(interval_ms.unwrap_or(config.detection.sample_interval_ms));

    let schedule = FrameSchedule::new(duration, interval);
    println!(
        "{} frames every {}ms",
        schedule.len(),
        schedule.interval().as_millis()
    );
    for (index, timestamp) in schedule.timestamps().iter().enumerate() {
        println!("{index:>4}  {:>8.3}s", timestamp.as_secs_f64());
    }
    Ok(())
}
