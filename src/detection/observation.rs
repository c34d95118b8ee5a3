// ABOUTME: Classifier observations with ranked label candidates
// ABOUTME: Converts each observation's top label into a detected ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_lens_core::errors::DetectionError;
use recipe_lens_core::models::{BoundingBox, DetectedIngredient};
use serde::{Deserialize, Serialize};

/// One classification hypothesis for an observed object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelCandidate {
    /// Class label
    pub identifier: String,
    /// Model confidence in [0, 1]
    pub confidence: f32,
}

/// An object located in a frame together with its label hypotheses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectObservation {
    /// Candidate labels in model order
    #[serde(default)]
    pub labels: Vec<LabelCandidate>,
    /// Normalized location in the frame
    #[serde(default, alias = "boundingBox")]
    pub bounding_box: BoundingBox,
}

impl ObjectObservation {
    /// Highest-confidence label, if any
    #[must_use]
    pub fn top_label(&self) -> Option<&LabelCandidate> {
        self.labels
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// Turn observations into detections using each observation's top label.
///
/// Observations without labels are skipped.
///
/// # Errors
///
/// Returns `DetectionError::InvalidConfidence` if a top label's confidence is
/// outside [0, 1]
pub fn detections_from_observations(
    observations: &[ObjectObservation],
) -> Result<Vec<DetectedIngredient>, DetectionError> {
    observations
        .iter()
        .filter_map(|observation| {
            observation.top_label().map(|label| {
                DetectedIngredient::new(
                    label.identifier.clone(),
                    label.confidence,
                    observation.bounding_box,
                )
            })
        })
        .collect()
}
