// ABOUTME: Domain error types for detection, catalog loading, and recipe matching
// ABOUTME: Each component reports failures as values through its own error enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Domain Errors
//!
//! - `DetectionError` - a single frame could not be analysed (absorbed by aggregation)
//! - `CatalogError` - a recipe dataset could not be turned into a catalog
//! - `MatchError` - the expected "nothing to show" outcomes of a match run

/// Recipe catalog load errors
pub mod catalog;
/// Per-frame detection errors
pub mod detection;
/// Recipe matching outcomes that carry no results
pub mod matching;

pub use catalog::CatalogError;
pub use detection::DetectionError;
pub use matching::MatchError;
