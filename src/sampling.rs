// ABOUTME: Video frame sampling schedule at fixed intervals
// ABOUTME: Computes the timestamps at which frames are extracted for detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_lens_core::constants::detection::DEFAULT_SAMPLE_INTERVAL_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timestamps at which a video is sampled.
///
/// Only whole seconds of the duration are considered, so a 2.9 s clip sampled
/// every 500 ms yields four frames at 0, 500, 1000 and 1500 ms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSchedule {
    interval: Duration,
    timestamps: Vec<Duration>,
}

impl FrameSchedule {
    /// Schedule frames every `interval` across `duration`.
    ///
    /// A zero duration or zero interval produces an empty schedule.
    #[must_use]
    pub fn new(duration: Duration, interval: Duration) -> Self {
        let interval_ms = interval.as_millis();
        let count = if interval_ms == 0 {
            0
        } else {
            u128::from(duration.as_secs()) * 1000 / interval_ms
        };
        let timestamps = (0..count)
            .map(|i| Duration::from_millis((i * interval_ms) as u64))
            .collect();
        Self {
            interval,
            timestamps,
        }
    }

    /// Schedule frames at the default 500 ms interval
    #[must_use]
    pub fn default_for(duration: Duration) -> Self {
        Self::new(duration, Duration::from_millis(DEFAULT_SAMPLE_INTERVAL_MS))
    }

    /// Sampling interval
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Sample timestamps in ascending order
    #[must_use]
    pub fn timestamps(&self) -> &[Duration] {
        &self.timestamps
    }

    /// Number of sampled frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether no frame is sampled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
