// ABOUTME: Ingredient-to-recipe matching with exact and substring scoring
// ABOUTME: Filters detections by confidence, scores every recipe, and ranks the top results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Matching
//!
//! Scoring for a recipe with distinct ingredient keys `R` against detected keys `D`:
//!
//! ```text
//! exact        = |R ∩ D|
//! partial      = |{ i ∈ R : ∃ d ∈ D, d contains i or i contains d }|
//! partial_only = partial - exact
//! score        = (exact * exact_weight + partial_only * partial_weight) / |R|
//! ```
//!
//! Recipes scoring strictly above `min_match_score` are ranked by descending
//! score. Sorting is stable, so ties keep catalog order and repeated runs over
//! the same inputs return identical results.

use crate::config::MatchingConfig;
use rayon::prelude::*;
use recipe_lens_core::constants::matching::PARALLEL_SCORING_THRESHOLD;
use recipe_lens_core::errors::MatchError;
use recipe_lens_core::models::{
    DetectedIngredient, IngredientKey, MatchBreakdown, Recipe, ScoredRecipe,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Scores a recipe catalog against detected ingredients
#[derive(Debug, Clone, Default)]
pub struct RecipeMatcher {
    config: MatchingConfig,
}

impl RecipeMatcher {
    /// Create a matcher with the given configuration
    #[must_use]
    pub const fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Lowercased names of detections strictly above the confidence threshold.
    ///
    /// Blank names are ignored.
    #[must_use]
    pub fn detected_keys(&self, detections: &[DetectedIngredient]) -> BTreeSet<IngredientKey> {
        detections
            .iter()
            .filter(|detection| detection.exceeds(self.config.confidence_threshold))
            .map(DetectedIngredient::key)
            .filter(|key| !key.is_blank())
            .collect()
    }

    /// Score one recipe against a set of detected keys.
    ///
    /// Returns `None` for recipes without any named ingredient.
    #[must_use]
    pub fn score(
        &self,
        recipe: &Recipe,
        detected: &BTreeSet<IngredientKey>,
    ) -> Option<MatchBreakdown> {
        let keys: Vec<IngredientKey> = recipe
            .distinct_ingredient_keys()
            .into_iter()
            .filter(|key| !key.is_blank())
            .collect();
        if keys.is_empty() {
            return None;
        }

        let exact = keys.iter().filter(|key| detected.contains(*key)).count();
        let partial = keys
            .iter()
            .filter(|key| detected.iter().any(|found| found.overlaps(key)))
            .count();
        let partial_only = partial - exact;

        let weighted = (exact as f64).mul_add(
            self.config.exact_weight,
            partial_only as f64 * self.config.partial_weight,
        );

        Some(MatchBreakdown {
            exact,
            partial_only,
            distinct_ingredients: keys.len(),
            score: weighted / keys.len() as f64,
        })
    }

    /// Rank `catalog` against `detections`, returning at most `top_k` recipes.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::NoIngredientsDetected` when no detection clears the
    /// confidence threshold, or `MatchError::NoMatchingRecipes` when no recipe
    /// scores above the minimum
    pub fn find_matches(
        &self,
        detections: &[DetectedIngredient],
        catalog: &[Recipe],
    ) -> Result<Vec<ScoredRecipe>, MatchError> {
        let detected = self.detected_keys(detections);
        if detected.is_empty() {
            return Err(MatchError::NoIngredientsDetected {
                threshold: self.config.confidence_threshold,
            });
        }

        let mut ranked = self.score_catalog(catalog, &detected);
        let candidates = ranked.len();
        if ranked.is_empty() {
            debug!(
                detected = detected.len(),
                catalog = catalog.len(),
                "No recipe scored above the minimum"
            );
            return Err(MatchError::NoMatchingRecipes {
                detected: detected.len(),
                min_score: self.config.min_match_score,
            });
        }

        // Emptiness is decided before truncation; a zero `top_k` yields an empty ranking.
        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
        ranked.truncate(self.config.top_k);

        debug!(
            detected = detected.len(),
            catalog = catalog.len(),
            candidates,
            returned = ranked.len(),
            "Recipe match run complete"
        );
        Ok(ranked)
    }

    /// Score every recipe, keeping those above the minimum in catalog order
    fn score_catalog(
        &self,
        catalog: &[Recipe],
        detected: &BTreeSet<IngredientKey>,
    ) -> Vec<ScoredRecipe> {
        let min_score = self.config.min_match_score;
        let score_one = |recipe: &Recipe| {
            self.score(recipe, detected)
                .filter(|breakdown| breakdown.score > min_score)
                .map(|breakdown| ScoredRecipe::new(recipe.clone(), breakdown))
        };

        if catalog.len() >= PARALLEL_SCORING_THRESHOLD {
            catalog.par_iter().filter_map(score_one).collect()
        } else {
            catalog.iter().filter_map(score_one).collect()
        }
    }
}

/// Rank `catalog` with default weights and minimum score.
///
/// # Errors
///
/// See [`RecipeMatcher::find_matches`]
pub fn match_recipes(
    detections: &[DetectedIngredient],
    catalog: &[Recipe],
    confidence_threshold: f32,
    top_k: usize,
) -> Result<Vec<ScoredRecipe>, MatchError> {
    let config = MatchingConfig::default()
        .with_confidence_threshold(confidence_threshold)
        .with_top_k(top_k);
    RecipeMatcher::new(config).find_matches(detections, catalog)
}
