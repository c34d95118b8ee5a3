// ABOUTME: Match outcome errors for runs that produce no ranked recipes
// ABOUTME: Both variants are recoverable empty states, not faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Typed "no results" outcomes of a match run.
///
/// Callers are expected to present an empty state for either variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// No detection cleared the confidence threshold
    #[error("no ingredients detected above confidence {threshold}")]
    NoIngredientsDetected {
        /// Threshold that every detection failed to exceed
        threshold: f32,
    },

    /// Ingredients were detected but no recipe scored above the minimum
    #[error("no recipes matched {detected} detected ingredient(s) above score {min_score}")]
    NoMatchingRecipes {
        /// Number of distinct ingredient names that cleared the threshold
        detected: usize,
        /// Score every recipe failed to exceed
        min_score: f64,
    },
}

impl MatchError {
    /// Whether the caller can recover by showing an empty state
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoIngredientsDetected { .. } | Self::NoMatchingRecipes { .. }
        )
    }
}
