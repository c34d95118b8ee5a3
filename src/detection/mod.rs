// ABOUTME: Per-frame ingredient detection seam and scan orchestration
// ABOUTME: Defines the detector trait, lifecycle state, and observation conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Detection
//!
//! Inference itself is external. A model backend implements
//! [`IngredientDetector`]; [`DetectionPipeline`] feeds it frames with bounded
//! concurrency and places each result in the slot for its frame index.

/// Classifier observations and their conversion into detections
pub mod observation;
/// Concurrent frame scanning
pub mod pipeline;
/// Detector replaying pre-computed results
pub mod recorded;

pub use observation::{detections_from_observations, LabelCandidate, ObjectObservation};
pub use pipeline::DetectionPipeline;
pub use recorded::RecordedDetector;

use async_trait::async_trait;
use recipe_lens_core::errors::DetectionError;
use recipe_lens_core::models::DetectedIngredient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-frame ingredient detector
#[async_trait]
pub trait IngredientDetector: Send + Sync {
    /// Frame representation consumed by the detector
    type Frame: Send + Sync;

    /// Prepare the detector (load weights, open sessions)
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::Unavailable` if the detector cannot be used
    async fn warm_up(&self) -> Result<(), DetectionError> {
        Ok(())
    }

    /// Detect ingredients in the frame at `index`
    ///
    /// # Errors
    ///
    /// Returns a `DetectionError` describing why this frame produced no result
    async fn detect(
        &self,
        index: usize,
        frame: &Self::Frame,
    ) -> Result<Vec<DetectedIngredient>, DetectionError>;
}

/// Lifecycle of a detection pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum DetectionState {
    /// Detector not yet prepared
    Initializing,
    /// Idle and able to scan
    Ready,
    /// A scan is in progress
    Scanning,
    /// The detector could not be prepared
    Failed(String),
}

impl DetectionState {
    /// Whether a scan can start without preparing the detector first
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for DetectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => f.write_str("initializing"),
            Self::Ready => f.write_str("ready"),
            Self::Scanning => f.write_str("scanning"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
