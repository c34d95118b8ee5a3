// ABOUTME: Recipe catalog loading from JSON or YAML datasets
// ABOUTME: Parses pipe-delimited ingredient lists into an immutable list of recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Catalog
//!
//! A dataset is a sequence of records with the fields `recipe_title`,
//! `ingredients` (names separated by `|`), `instructions`, `cuisine`,
//! `prep_time`, `cook_time` and `description`. Every field is required; the
//! first record missing one fails the whole load.

use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use recipe_lens_core::constants::catalog::INGREDIENT_SEPARATOR;
use recipe_lens_core::errors::CatalogError;
use recipe_lens_core::models::{Recipe, RecipeId, RecipeIngredient};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::slice;
use std::time::Instant;
use tracing::{debug, warn};

/// One recipe as it appears in the source dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecipeRecord {
    /// Display title
    #[serde(default, alias = "title", alias = "name")]
    pub recipe_title: Option<String>,
    /// Ingredient names separated by `|`
    #[serde(default)]
    pub ingredients: Option<String>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Option<String>,
    /// Cuisine label
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Preparation time
    #[serde(default)]
    pub prep_time: Option<String>,
    /// Cooking time
    #[serde(default)]
    pub cook_time: Option<String>,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
}

impl RawRecipeRecord {
    /// Convert into a recipe with a fresh id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingField` naming `record` and the first absent field
    pub fn into_recipe(self, record: usize) -> Result<Recipe, CatalogError> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or(CatalogError::MissingField { record, field })
        };

        let name = require(self.recipe_title, "recipe_title")?;
        let ingredients = parse_ingredient_list(&require(self.ingredients, "ingredients")?);

        Ok(Recipe {
            id: RecipeId::generate(),
            name,
            ingredients,
            instructions: require(self.instructions, "instructions")?,
            cuisine: require(self.cuisine, "cuisine")?,
            prep_time: require(self.prep_time, "prep_time")?,
            cook_time: require(self.cook_time, "cook_time")?,
            description: require(self.description, "description")?,
        })
    }
}

/// Split a `|`-delimited ingredient string, trimming entries and dropping empty ones
#[must_use]
pub fn parse_ingredient_list(raw: &str) -> Vec<RecipeIngredient> {
    raw.split(INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(RecipeIngredient::new)
        .collect()
}

/// Build a catalog from raw records.
///
/// # Errors
///
/// Returns the first `CatalogError` encountered; no partial catalog is produced
pub fn load_catalog<I>(records: I) -> Result<RecipeCatalog, CatalogError>
where
    I: IntoIterator<Item = RawRecipeRecord>,
{
    let recipes = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_recipe(index))
        .collect::<Result<Vec<_>, _>>()?;

    for recipe in recipes.iter().filter(|recipe| recipe.ingredients.is_empty()) {
        warn!(
            recipe.id = %recipe.id,
            recipe.name = %recipe.name,
            "Recipe has no ingredients and will never match"
        );
    }

    debug!(recipes = recipes.len(), "Recipe catalog built");
    Ok(RecipeCatalog {
        recipes,
        loaded_at: Utc::now(),
    })
}

/// Immutable, ordered collection of recipes
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    loaded_at: DateTime<Utc>,
}

impl RecipeCatalog {
    /// Parse a JSON array of recipe records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` for invalid JSON, or any record error
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let records: Vec<RawRecipeRecord> =
            serde_json::from_str(content).map_err(|e| CatalogError::malformed(e.to_string()))?;
        load_catalog(records)
    }

    /// Parse a YAML sequence of recipe records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` for invalid YAML, or any record error
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let records: Vec<RawRecipeRecord> =
            serde_yaml::from_str(content).map_err(|e| CatalogError::malformed(e.to_string()))?;
        load_catalog(records)
    }

    /// Load a dataset file, choosing the format by extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnsupportedFormat` for unknown extensions,
    /// `CatalogError::Io` if the file cannot be read, or any parse error
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => return Err(CatalogError::UnsupportedFormat { path: display }),
        };

        let started = Instant::now();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let catalog = parse(&content)?;

        AppLogger::log_catalog_loaded(
            &display,
            catalog.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(catalog)
    }

    /// Recipes in dataset order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Iterate recipes in dataset order
    pub fn iter(&self) -> slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// When this catalog was built
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
