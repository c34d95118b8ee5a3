// ABOUTME: Configuration management module for matching and detection settings
// ABOUTME: Loads environment-driven settings and validates them before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for recipe lens
//!
//! - **Environment**: `LensConfig` and `DetectionConfig` loaded from `RECIPE_LENS_*` variables
//! - **Matching**: `MatchingConfig`, re-exported from the intelligence crate

/// Environment-driven configuration
pub mod environment;

pub use environment::{DetectionConfig, LensConfig};
pub use recipe_lens_intelligence::config::{ConfigError, MatchingConfig};
