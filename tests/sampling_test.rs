// ABOUTME: Integration tests for video frame sampling schedules
// ABOUTME: Checks frame counts, timestamps, and degenerate durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_lens::sampling::FrameSchedule;
use std::time::Duration;

#[test]
fn test_default_schedule_samples_twice_per_second() {
    let schedule = FrameSchedule::default_for(Duration::from_secs(3));

    assert_eq!(schedule.len(), 6);
    assert_eq!(schedule.interval(), Duration::from_millis(500));
    assert_eq!(schedule.timestamps()[0], Duration::ZERO);
    assert_eq!(schedule.timestamps()[5], Duration::from_millis(2500));
}

#[test]
fn test_fractional_seconds_are_dropped() {
    let schedule = FrameSchedule::default_for(Duration::from_millis(2900));

    assert_eq!(schedule.len(), 4);
    assert_eq!(
        schedule.timestamps().last().copied(),
        Some(Duration::from_millis(1500))
    );
}

#[test]
fn test_timestamps_are_ascending_and_evenly_spaced() {
    let schedule = FrameSchedule::new(Duration::from_secs(2), Duration::from_millis(300));

    assert_eq!(schedule.len(), 6);
    assert!(schedule
        .timestamps()
        .windows(2)
        .all(|w| w[1] - w[0] == Duration::from_millis(300)));
}

#[test]
fn test_degenerate_inputs_produce_empty_schedule() {
    assert!(FrameSchedule::default_for(Duration::from_millis(999)).is_empty());
    assert!(FrameSchedule::new(Duration::from_secs(10), Duration::ZERO).is_empty());
}
