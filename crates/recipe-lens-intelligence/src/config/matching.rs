// ABOUTME: Recipe matching configuration types
// ABOUTME: Confidence threshold, minimum score, result count, and match weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::env::env_parse_or;
use crate::config::error::ConfigError;
use recipe_lens_core::constants::matching;
use serde::{Deserialize, Serialize};

/// Recipe matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Detections must be strictly more confident than this to count
    pub confidence_threshold: f32,
    /// Recipes must score strictly above this to be returned
    pub min_match_score: f64,
    /// Maximum number of ranked recipes returned
    pub top_k: usize,
    /// Weight of an exact name match
    pub exact_weight: f64,
    /// Weight of a substring-only match
    pub partial_weight: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: matching::DEFAULT_CONFIDENCE_THRESHOLD,
            min_match_score: matching::DEFAULT_MIN_MATCH_SCORE,
            top_k: matching::DEFAULT_TOP_K,
            exact_weight: matching::EXACT_MATCH_WEIGHT,
            partial_weight: matching::PARTIAL_MATCH_WEIGHT,
        }
    }
}

impl MatchingConfig {
    /// Load matching configuration from environment
    ///
    /// Unset or unparseable variables keep their defaults; unparseable ones are
    /// logged at `warn`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            confidence_threshold: env_parse_or(
                "RECIPE_LENS_CONFIDENCE_THRESHOLD",
                matching::DEFAULT_CONFIDENCE_THRESHOLD,
            ),
            min_match_score: env_parse_or(
                "RECIPE_LENS_MIN_MATCH_SCORE",
                matching::DEFAULT_MIN_MATCH_SCORE,
            ),
            top_k: env_parse_or("RECIPE_LENS_TOP_K", matching::DEFAULT_TOP_K),
            exact_weight: env_parse_or("RECIPE_LENS_EXACT_WEIGHT", matching::EXACT_MATCH_WEIGHT),
            partial_weight: env_parse_or(
                "RECIPE_LENS_PARTIAL_WEIGHT",
                matching::PARTIAL_MATCH_WEIGHT,
            ),
        }
    }

    /// Override the confidence threshold
    #[must_use]
    pub const fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Override the number of returned recipes
    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Validate the configuration
    ///
    /// Weights are constrained so that every score stays within [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::InvalidRange(
                "confidence_threshold must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_match_score) {
            return Err(ConfigError::InvalidRange(
                "min_match_score must be between 0 and 1",
            ));
        }
        if self.top_k == 0 {
            return Err(ConfigError::ValueOutOfRange("top_k must be at least 1"));
        }
        if !(self.exact_weight > 0.0 && self.exact_weight <= 1.0) {
            return Err(ConfigError::InvalidWeights(
                "exact_weight must be in (0, 1]",
            ));
        }
        if !(0.0..=self.exact_weight).contains(&self.partial_weight) {
            return Err(ConfigError::InvalidWeights(
                "partial_weight must be between 0 and exact_weight",
            ));
        }
        Ok(())
    }
}
