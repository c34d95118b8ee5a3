// ABOUTME: Integration tests for the concurrent detection pipeline
// ABOUTME: Verifies index placement under out-of-order completion, timeouts, and lifecycle state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{detection, init_test_logging, names};
use recipe_lens::config::DetectionConfig;
use recipe_lens::core::errors::DetectionError;
use recipe_lens::core::models::DetectedIngredient;
use recipe_lens::detection::{
    DetectionPipeline, DetectionState, IngredientDetector, RecordedDetector,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn config(max_concurrent_frames: usize, frame_timeout_ms: Option<u64>) -> DetectionConfig {
    DetectionConfig {
        max_concurrent_frames,
        frame_timeout_ms,
        ..DetectionConfig::default()
    }
}

#[tokio::test]
async fn test_out_of_order_completion_keeps_frame_order() {
    init_test_logging();
    let detector = RecordedDetector::new(vec![
        Some(vec![detection("tomato", 0.9)]),
        Some(vec![detection("basil", 0.8)]),
        Some(vec![detection("cheese", 0.85), detection("Tomato", 0.95)]),
    ])
    .with_delays(vec![
        Duration::from_millis(60),
        Duration::from_millis(30),
        Duration::ZERO,
    ]);
    let frames = detector.frame_ids();
    let pipeline = DetectionPipeline::new(detector, config(3, None));

    let aggregation = pipeline.scan(&frames).await.unwrap();

    assert_eq!(aggregation.frame_count(), 3);
    assert_eq!(names(aggregation.frame(0).unwrap()), vec!["tomato"]);
    assert_eq!(names(aggregation.frame(1).unwrap()), vec!["basil"]);
    assert_eq!(names(aggregation.frame(2).unwrap()), vec!["cheese", "Tomato"]);
    assert_eq!(
        names(aggregation.ingredients()),
        vec!["Tomato", "basil", "cheese"]
    );
}

#[tokio::test]
async fn test_failed_frames_become_empty_slots() {
    init_test_logging();
    let detector = RecordedDetector::new(vec![
        None,
        Some(vec![detection("lemon", 0.9)]),
        None,
    ]);
    let frames = vec![0, 1, 2, 7];
    let pipeline = DetectionPipeline::new(detector, config(2, None));

    let aggregation = pipeline.scan(&frames).await.unwrap();

    assert_eq!(aggregation.frame_count(), 4);
    assert!(aggregation.frame(0).unwrap().is_empty());
    assert_eq!(names(aggregation.frame(1).unwrap()), vec!["lemon"]);
    assert!(aggregation.frame(2).unwrap().is_empty());
    assert!(aggregation.frame(3).unwrap().is_empty());
}

#[tokio::test]
async fn test_slow_frames_time_out_without_failing_scan() {
    init_test_logging();
    let detector = RecordedDetector::new(vec![
        Some(vec![detection("onion", 0.9)]),
        Some(vec![detection("garlic", 0.9)]),
    ])
    .with_delays(vec![Duration::from_millis(500), Duration::ZERO]);
    let frames = detector.frame_ids();
    let pipeline = DetectionPipeline::new(detector, config(2, Some(20)));

    let aggregation = pipeline.scan(&frames).await.unwrap();

    assert!(aggregation.frame(0).unwrap().is_empty());
    assert_eq!(names(aggregation.ingredients()), vec!["garlic"]);
}

struct CountingDetector {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl IngredientDetector for CountingDetector {
    type Frame = ();

    async fn detect(
        &self,
        index: usize,
        _frame: &(),
    ) -> Result<Vec<DetectedIngredient>, DetectionError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        sleep(Duration::from_millis(10)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(vec![detection(&format!("item-{index}"), 0.9)])
    }
}

#[tokio::test]
async fn test_concurrency_is_bounded() {
    init_test_logging();
    let detector = CountingDetector {
        in_flight: AtomicUsize::new(0),
        peak: AtomicUsize::new(0),
    };
    let pipeline = DetectionPipeline::new(detector, config(2, None));

    let aggregation = pipeline.scan(&[(); 8]).await.unwrap();

    assert_eq!(aggregation.ingredients().len(), 8);
    assert!(pipeline.detector().peak.load(Ordering::SeqCst) <= 2);
}

struct BrokenDetector {
    attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl IngredientDetector for BrokenDetector {
    type Frame = ();

    async fn warm_up(&self) -> Result<(), DetectionError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DetectionError::Unavailable {
            reason: "model file missing".to_owned(),
        })
    }

    async fn detect(
        &self,
        _index: usize,
        _frame: &(),
    ) -> Result<Vec<DetectedIngredient>, DetectionError> {
        panic!("detect must not run when warm-up fails");
    }
}

#[tokio::test]
async fn test_warm_up_failure_stops_scan_and_sets_failed_state() {
    init_test_logging();
    let attempts = Arc::new(AtomicUsize::new(0));
    let pipeline = DetectionPipeline::new(
        BrokenDetector {
            attempts: Arc::clone(&attempts),
        },
        DetectionConfig::default(),
    );

    let error = pipeline.scan(&[(), ()]).await.unwrap_err();

    assert!(matches!(error, DetectionError::Unavailable { .. }));
    assert_eq!(
        pipeline.state(),
        DetectionState::Failed("detector unavailable: model file missing".to_owned())
    );

    // A later scan retries initialization
    let _ = pipeline.scan(&[()]).await;
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_state_transitions_are_published() {
    init_test_logging();
    let detector = RecordedDetector::new(vec![Some(vec![detection("rice", 0.9)])]);
    let frames = detector.frame_ids();
    let pipeline = DetectionPipeline::new(detector, DetectionConfig::default());
    let mut receiver = pipeline.subscribe();

    assert_eq!(pipeline.state(), DetectionState::Initializing);
    pipeline.scan(&frames).await.unwrap();

    assert!(receiver.has_changed().unwrap());
    assert_eq!(*receiver.borrow_and_update(), DetectionState::Ready);
    assert!(pipeline.state().is_ready());
}

#[tokio::test]
async fn test_recording_parses_null_frames() {
    init_test_logging();
    let recording = r#"[
        [{"name": "Egg", "confidence": 0.92, "boundingBox": {"x": 0.1, "y": 0.2, "width": 0.3, "height": 0.3}}],
        null,
        []
    ]"#;
    let detector = RecordedDetector::from_json_str(recording).unwrap();
    assert_eq!(detector.frame_count(), 3);

    let frames = detector.frame_ids();
    let pipeline = DetectionPipeline::new(detector, DetectionConfig::default());
    let aggregation = pipeline.scan(&frames).await.unwrap();

    assert_eq!(names(aggregation.ingredients()), vec!["Egg"]);
    assert!(aggregation.frame(1).unwrap().is_empty());
}

#[tokio::test]
async fn test_recording_rejects_invalid_confidence() {
    let recording = r#"[[{"name": "Egg", "confidence": 1.5}]]"#;
    assert!(RecordedDetector::from_json_str(recording).is_err());
}
