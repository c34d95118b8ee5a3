// ABOUTME: Per-frame detection aggregation into a deduplicated ingredient set
// ABOUTME: Stores frame results in index-addressed slots so completion order never matters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Detection Aggregation
//!
//! Frames may finish detection in any order. Each result is written to the slot
//! for its frame index, and a failed frame occupies its slot as an empty list,
//! so `frames[i]` always describes frame `i`.
//!
//! The deduplicated ingredient set is the concatenation of every slot in frame
//! order with repeated `IngredientKey`s collapsed. Each name keeps the position
//! of its first occurrence and the most confident detection seen for it, so a
//! weak early sighting never hides a confident later one.

use recipe_lens_core::errors::DetectionError;
use recipe_lens_core::models::{DetectedIngredient, IngredientKey};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Collapse detections whose names repeat case-insensitively.
///
/// The result is ordered by first occurrence; each entry is the most confident
/// detection of its name, with ties going to the earliest.
#[must_use]
pub fn dedupe(detections: &[DetectedIngredient]) -> Vec<DetectedIngredient> {
    let mut positions: HashMap<IngredientKey, usize> = HashMap::with_capacity(detections.len());
    let mut kept: Vec<DetectedIngredient> = Vec::with_capacity(detections.len());
    for detection in detections {
        match positions.entry(detection.key()) {
            Entry::Occupied(slot) => {
                let current = &mut kept[*slot.get()];
                if detection.confidence() > current.confidence() {
                    *current = detection.clone();
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(detection.clone());
            }
        }
    }
    kept
}

/// Aggregate an ordered sequence of per-frame outcomes.
///
/// Frame `i` of the result corresponds to item `i` of `batches`; failed frames
/// become empty lists.
#[must_use]
pub fn aggregate<I>(batches: I) -> Aggregation
where
    I: IntoIterator<Item = Result<Vec<DetectedIngredient>, DetectionError>>,
{
    let mut aggregator = DetectionAggregator::new();
    for (index, outcome) in batches.into_iter().enumerate() {
        aggregator.record_outcome(index, outcome);
    }
    aggregator.finish()
}

/// Collects per-frame detections into index-addressed slots
#[derive(Debug, Default, Clone)]
pub struct DetectionAggregator {
    slots: Vec<Option<Vec<DetectedIngredient>>>,
}

impl DetectionAggregator {
    /// Create an aggregator with no frames
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator expecting `frame_count` frames.
    ///
    /// Frames never recorded still appear in the result as empty lists.
    #[must_use]
    pub fn with_frame_count(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of frame slots currently tracked
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.slots.len()
    }

    /// Store the detections for frame `index`, replacing any earlier result
    pub fn record_frame(&mut self, index: usize, detections: Vec<DetectedIngredient>) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        if self.slots[index].is_some() {
            debug!(frame = index, "Replacing previously recorded frame");
        }
        debug!(
            frame = index,
            detections = detections.len(),
            "Recorded frame detections"
        );
        self.slots[index] = Some(detections);
    }

    /// Record a failed frame as an empty result
    pub fn record_failure(&mut self, index: usize, error: &DetectionError) {
        warn!(frame = index, error = %error, "Frame detection failed, treating as empty");
        self.record_frame(index, Vec::new());
    }

    /// Record either outcome of a frame detection
    pub fn record_outcome(
        &mut self,
        index: usize,
        outcome: Result<Vec<DetectedIngredient>, DetectionError>,
    ) {
        match outcome {
            Ok(detections) => self.record_frame(index, detections),
            Err(error) => self.record_failure(index, &error),
        }
    }

    /// Drop every recorded frame
    pub fn reset(&mut self) {
        self.slots.clear();
    }

    /// Finalize into per-frame lists and the deduplicated ingredient set
    #[must_use]
    pub fn finish(self) -> Aggregation {
        let frames: Vec<Vec<DetectedIngredient>> = self
            .slots
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect();
        let accumulated: Vec<DetectedIngredient> = frames.iter().flatten().cloned().collect();
        let ingredients = dedupe(&accumulated);

        debug!(
            frames = frames.len(),
            raw_detections = accumulated.len(),
            distinct_ingredients = ingredients.len(),
            "Aggregation complete"
        );

        Aggregation {
            ingredients,
            frames,
        }
    }
}

/// Result of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    ingredients: Vec<DetectedIngredient>,
    frames: Vec<Vec<DetectedIngredient>>,
}

impl Aggregation {
    /// Deduplicated ingredients across all frames
    #[must_use]
    pub fn ingredients(&self) -> &[DetectedIngredient] {
        &self.ingredients
    }

    /// Per-frame detections in frame order
    #[must_use]
    pub fn frames(&self) -> &[Vec<DetectedIngredient>] {
        &self.frames
    }

    /// Detections of a single frame
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&[DetectedIngredient]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Number of frames, including failed ones
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total detections before deduplication
    #[must_use]
    pub fn raw_detection_count(&self) -> usize {
        self.frames.iter().map(Vec::len).sum()
    }

    /// Split into `(ingredients, frames)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<DetectedIngredient>, Vec<Vec<DetectedIngredient>>) {
        (self.ingredients, self.frames)
    }
}
