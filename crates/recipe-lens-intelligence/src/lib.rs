// ABOUTME: Detection aggregation and recipe matching engine
// ABOUTME: Pure, synchronous algorithms with no I/O or shared mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Lens Intelligence
//!
//! Turns per-frame detections into a deduplicated ingredient set and ranks
//! catalog recipes against it.
//!
//! ```text
//! frames -> detector -> aggregation -> matching (+ catalog) -> ranked recipes
//! ```
//!
//! Every function here is a pure transformation of its inputs. Scores are
//! returned as fresh `ScoredRecipe` values; catalog recipes are never mutated,
//! so concurrent match runs over the same catalog are safe.

/// Index-addressed per-frame aggregation and deduplication
pub mod aggregation;
/// Matching configuration and validation
pub mod config;
/// Recipe scoring and top-K ranking
pub mod matching;

pub use aggregation::{aggregate, dedupe, Aggregation, DetectionAggregator};
pub use config::{ConfigError, MatchingConfig};
pub use matching::{match_recipes, RecipeMatcher};
