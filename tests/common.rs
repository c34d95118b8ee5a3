// ABOUTME: Shared test utilities for recipe lens integration tests
// ABOUTME: Provides detection and recipe builders plus quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_lens`

use recipe_lens::core::models::{BoundingBox, DetectedIngredient, Recipe};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Detection with a unit bounding box at the origin
pub fn detection(name: &str, confidence: f32) -> DetectedIngredient {
    DetectedIngredient::new(name, confidence, BoundingBox::new(0.0, 0.0, 0.1, 0.1)).unwrap()
}

/// Recipe with only a name and ingredients
pub fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe::new(name, ingredients.iter().copied())
}

/// Names of a detection list, in order
pub fn names(detections: &[DetectedIngredient]) -> Vec<&str> {
    detections.iter().map(DetectedIngredient::name).collect()
}
