// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default thresholds, scoring weights, and frame sampling values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values are grouped by the component that consumes them. Runtime overrides
//! live in the configuration types; these are the defaults they fall back to.

/// Recipe matching defaults
pub mod matching {
    /// Detections must have a confidence strictly above this value to count
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.7;
    /// Recipes must score strictly above this value to be returned
    pub const DEFAULT_MIN_MATCH_SCORE: f64 = 0.1;
    /// Number of ranked recipes returned per match run
    pub const DEFAULT_TOP_K: usize = 3;
    /// Weight of an exact ingredient name match
    pub const EXACT_MATCH_WEIGHT: f64 = 1.0;
    /// Weight of a substring-only ingredient match
    pub const PARTIAL_MATCH_WEIGHT: f64 = 0.5;
    /// Catalog size at which scoring moves onto the rayon pool
    pub const PARALLEL_SCORING_THRESHOLD: usize = 256;
}

/// Recipe catalog source format
pub mod catalog {
    /// Separator between ingredient names in a raw recipe record
    pub const INGREDIENT_SEPARATOR: char = '|';
}

/// Per-frame detection defaults
pub mod detection {
    /// Maximum number of frames handed to the detector at once
    pub const DEFAULT_MAX_CONCURRENT_FRAMES: usize = 4;
    /// Interval between sampled video frames in milliseconds
    pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 500;
}

/// Service identification for structured logs
pub mod service_names {
    /// Service name reported in log output
    pub const RECIPE_LENS: &str = "recipe-lens";
}
