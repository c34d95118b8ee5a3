// ABOUTME: Main library entry point for the recipe lens ingredient matcher
// ABOUTME: Wires catalog loading, frame detection, aggregation, and recipe ranking together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Lens
//!
//! Turns ingredients recognised in camera frames into ranked recipe suggestions.
//!
//! ## Architecture
//!
//! - **Catalog**: loads the recipe dataset (JSON or YAML) into an immutable `RecipeCatalog`
//! - **Detection**: drives an external per-frame `IngredientDetector` with bounded concurrency
//! - **Sampling**: computes the timestamps at which a video is sampled
//! - **Config**: environment-driven settings for matching and detection
//! - **Logging**: structured `tracing` output
//!
//! The scoring and aggregation algorithms live in `recipe-lens-intelligence`;
//! the shared domain types in `recipe-lens-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_lens::catalog::RecipeCatalog;
//! use recipe_lens::errors::AppResult;
//! use recipe_lens::intelligence::RecipeMatcher;
//!
//! fn main() -> AppResult<()> {
//!     let catalog = RecipeCatalog::load_path("recipes.json")?;
//!     let matcher = RecipeMatcher::default();
//!     let ranked = matcher.find_matches(&[], catalog.recipes())?;
//!     println!("{} recipes", ranked.len());
//!     Ok(())
//! }
//! ```

/// Recipe dataset loading
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Per-frame detector seam and scan orchestration
pub mod detection;

/// Unified application error type
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Video frame sampling schedule
pub mod sampling;

/// Shared domain types
pub use recipe_lens_core as core;

/// Aggregation and matching algorithms
pub use recipe_lens_intelligence as intelligence;
