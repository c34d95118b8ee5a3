// ABOUTME: Detector that replays pre-computed per-frame detections
// ABOUTME: Used to run recorded sessions and fixtures through the detection pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::detection::IngredientDetector;
use async_trait::async_trait;
use recipe_lens_core::errors::DetectionError;
use recipe_lens_core::models::DetectedIngredient;
use serde::Deserialize;
use std::time::Duration;
use tokio::time;

/// Replays recorded detections.
///
/// Each frame is the index of a recorded entry. A `None` entry stands for a
/// frame whose inference failed when it was recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordedDetector {
    frames: Vec<Option<Vec<DetectedIngredient>>>,
    delays: Vec<Duration>,
}

impl RecordedDetector {
    /// Create a detector from recorded frames
    #[must_use]
    pub fn new(frames: Vec<Option<Vec<DetectedIngredient>>>) -> Self {
        Self {
            frames,
            delays: Vec::new(),
        }
    }

    /// Parse recorded frames from a JSON array whose items are detection
    /// arrays or `null`
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` for malformed input or invalid confidences
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(transparent)]
        struct Recording(Vec<Option<Vec<DetectedIngredient>>>);

        let Recording(frames) = serde_json::from_str(content)?;
        Ok(Self::new(frames))
    }

    /// Delay each frame's answer; frame `i` waits `delays[i]`
    #[must_use]
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    /// Number of recorded frames
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame handles for every recorded frame, in order
    #[must_use]
    pub fn frame_ids(&self) -> Vec<usize> {
        (0..self.frames.len()).collect()
    }
}

#[async_trait]
impl IngredientDetector for RecordedDetector {
    type Frame = usize;

    async fn detect(
        &self,
        index: usize,
        frame: &usize,
    ) -> Result<Vec<DetectedIngredient>, DetectionError> {
        if let Some(delay) = self.delays.get(*frame) {
            time::sleep(*delay).await;
        }
        match self.frames.get(*frame) {
            Some(Some(detections)) => Ok(detections.clone()),
            Some(None) => Err(DetectionError::inference(
                index,
                "recorded frame has no inference result",
            )),
            None => Err(DetectionError::MissingFrame { frame: index }),
        }
    }
}
