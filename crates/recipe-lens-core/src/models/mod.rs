// ABOUTME: Core data models for ingredient detection and recipe ranking
// ABOUTME: Re-exports detection, recipe, key, and scored result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Identity for ingredients is modelled by `IngredientKey`, a lowercased name
//! used as the set/map key. Domain entities keep ordinary structural equality.

/// Per-frame detection results and geometry
pub mod detection;
/// Case-insensitive ingredient identity
pub mod key;
/// Recipes, recipe ingredients, and scored match results
pub mod recipe;

pub use detection::{BoundingBox, DetectedIngredient, WorldPosition};
pub use key::IngredientKey;
pub use recipe::{MatchBreakdown, Recipe, RecipeId, RecipeIngredient, ScoredRecipe};
