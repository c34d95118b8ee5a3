// ABOUTME: Concurrent frame scanning over an external ingredient detector
// ABOUTME: Bounds in-flight frames, applies per-frame timeouts, and aggregates by frame index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DetectionConfig;
use crate::detection::{DetectionState, IngredientDetector};
use crate::logging::AppLogger;
use futures_util::{stream, StreamExt};
use recipe_lens_core::errors::DetectionError;
use recipe_lens_core::models::DetectedIngredient;
use recipe_lens_intelligence::aggregation::{Aggregation, DetectionAggregator};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, error, info};

/// Drives a detector over a batch of frames.
///
/// State changes are published on a `watch` channel so observers always see
/// the latest lifecycle stage.
pub struct DetectionPipeline<D: IngredientDetector> {
    detector: D,
    config: DetectionConfig,
    state: watch::Sender<DetectionState>,
}

impl<D: IngredientDetector> DetectionPipeline<D> {
    /// Create a pipeline in the `Initializing` state
    #[must_use]
    pub fn new(detector: D, config: DetectionConfig) -> Self {
        let (state, _) = watch::channel(DetectionState::Initializing);
        Self {
            detector,
            config,
            state,
        }
    }

    /// Underlying detector
    #[must_use]
    pub const fn detector(&self) -> &D {
        &self.detector
    }

    /// Active detection settings
    #[must_use]
    pub const fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> DetectionState {
        self.state.borrow().clone()
    }

    /// Receive every subsequent state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DetectionState> {
        self.state.subscribe()
    }

    /// Prepare the detector, moving to `Ready` or `Failed`
    ///
    /// # Errors
    ///
    /// Returns the detector's warm-up error
    pub async fn initialize(&self) -> Result<(), DetectionError> {
        match self.detector.warm_up().await {
            Ok(()) => {
                info!("Ingredient detector ready");
                self.state.send_replace(DetectionState::Ready);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Ingredient detector failed to initialize");
                self.state.send_replace(DetectionState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Detect ingredients in every frame and aggregate the results.
    ///
    /// At most `max_concurrent_frames` detections run at once. Results are
    /// placed by frame index, so completion order does not affect the output.
    /// A failed or timed-out frame contributes an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::Unavailable` (or the detector's own warm-up
    /// error) when the detector cannot be initialized; per-frame failures never
    /// fail the scan
    pub async fn scan(&self, frames: &[D::Frame]) -> Result<Aggregation, DetectionError> {
        if !self.state().is_ready() {
            self.initialize().await?;
        }

        let started = Instant::now();
        self.state.send_replace(DetectionState::Scanning);
        debug!(frames = frames.len(), "Starting frame scan");

        let limit = self.config.max_concurrent_frames.max(1);
        let timeout = self.config.frame_timeout();
        let mut aggregator = DetectionAggregator::with_frame_count(frames.len());

        let mut outcomes = stream::iter(frames.iter().enumerate())
            .map(|(index, frame)| async move {
                (index, self.detect_frame(index, frame, timeout).await)
            })
            .buffer_unordered(limit);

        while let Some((index, outcome)) = outcomes.next().await {
            aggregator.record_outcome(index, outcome);
        }

        let aggregation = aggregator.finish();
        self.state.send_replace(DetectionState::Ready);

        AppLogger::log_scan_summary(
            aggregation.frame_count(),
            aggregation.raw_detection_count(),
            aggregation.ingredients().len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(aggregation)
    }

    async fn detect_frame(
        &self,
        index: usize,
        frame: &D::Frame,
        timeout: Option<Duration>,
    ) -> Result<Vec<DetectedIngredient>, DetectionError> {
        let detection = self.detector.detect(index, frame);
        match timeout {
            Some(limit) => time::timeout(limit, detection)
                .await
                .map_err(|_| DetectionError::Timeout {
                    frame: index,
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => detection.await,
        }
    }
}
