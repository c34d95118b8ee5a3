// ABOUTME: Recipe data models and immutable scored match results
// ABOUTME: Defines Recipe, RecipeIngredient, RecipeId, MatchBreakdown, and ScoredRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::key::IngredientKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Opaque recipe identity, generated when a catalog is loaded.
///
/// Distinct from the recipe name, which may collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Single ingredient entry of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name as written in the dataset (trimmed)
    pub name: String,
}

impl RecipeIngredient {
    /// Create a recipe ingredient
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-insensitive identity of this ingredient
    #[must_use]
    pub fn key(&self) -> IngredientKey {
        IngredientKey::new(&self.name)
    }
}

/// Catalog recipe.
///
/// Recipes are immutable once loaded; per-run scores live in `ScoredRecipe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identity generated at load time
    pub id: RecipeId,
    /// Display title
    pub name: String,
    /// Ingredients in dataset order
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation steps
    pub instructions: String,
    /// Cuisine label
    pub cuisine: String,
    /// Preparation time as written in the dataset
    pub prep_time: String,
    /// Cooking time as written in the dataset
    pub cook_time: String,
    /// Short description
    pub description: String,
}

impl Recipe {
    /// Create a recipe with a fresh id and empty descriptive fields
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: RecipeId::generate(),
            name: name.into(),
            ingredients: ingredients.into_iter().map(RecipeIngredient::new).collect(),
            instructions: String::new(),
            cuisine: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            description: String::new(),
        }
    }

    /// Deduplicated, lowercased ingredient names
    #[must_use]
    pub fn distinct_ingredient_keys(&self) -> BTreeSet<IngredientKey> {
        self.ingredients.iter().map(RecipeIngredient::key).collect()
    }
}

/// How a recipe's score was assembled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    /// Recipe ingredients whose name equals a detected name
    pub exact: usize,
    /// Recipe ingredients matched only by substring containment
    pub partial_only: usize,
    /// Distinct ingredient names in the recipe (the score denominator)
    pub distinct_ingredients: usize,
    /// Weighted, normalized score
    pub score: f64,
}

/// A recipe paired with the score it earned in one match run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecipe {
    /// Copy of the catalog recipe
    pub recipe: Recipe,
    /// Score and its components
    #[serde(flatten)]
    pub breakdown: MatchBreakdown,
}

impl ScoredRecipe {
    /// Create a scored result
    #[must_use]
    pub const fn new(recipe: Recipe, breakdown: MatchBreakdown) -> Self {
        Self { recipe, breakdown }
    }

    /// Match score in [0, 1]
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.breakdown.score
    }

    /// Score as a truncated whole percentage for display
    #[must_use]
    pub fn match_percent(&self) -> u8 {
        (self.breakdown.score.clamp(0.0, 1.0) * 100.0) as u8
    }
}
