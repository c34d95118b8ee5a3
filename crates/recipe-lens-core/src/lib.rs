// ABOUTME: Core types and constants for the recipe lens ingredient matcher
// ABOUTME: Foundation crate with detections, recipes, normalized keys, and domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Lens Core
//!
//! Foundation crate providing the shared domain vocabulary for turning object
//! detections into ranked recipe suggestions. This crate is designed to change
//! infrequently so the algorithm and application crates compile incrementally.
//!
//! ## Modules
//!
//! - **models**: Detections, bounding boxes, recipes, and the normalized `IngredientKey`
//! - **errors**: Domain error enums for detection, catalog loading, and matching
//! - **constants**: Default thresholds, weights, and sampling intervals

/// Domain error types for detection, catalog loading, and matching
pub mod errors;

/// Default thresholds, weights, and limits
pub mod constants;

/// Core data models (detections, recipes, scored results)
pub mod models;

pub use errors::{CatalogError, DetectionError, MatchError};
pub use models::{
    BoundingBox, DetectedIngredient, IngredientKey, MatchBreakdown, Recipe, RecipeId,
    RecipeIngredient, ScoredRecipe, WorldPosition,
};
