// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates defaults, environment overrides, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_lens::config::{ConfigError, DetectionConfig, LensConfig, MatchingConfig};
use recipe_lens::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARIABLES: &[&str] = &[
    "RECIPE_LENS_CATALOG",
    "RECIPE_LENS_CONFIDENCE_THRESHOLD",
    "RECIPE_LENS_MIN_MATCH_SCORE",
    "RECIPE_LENS_TOP_K",
    "RECIPE_LENS_EXACT_WEIGHT",
    "RECIPE_LENS_PARTIAL_WEIGHT",
    "RECIPE_LENS_MAX_CONCURRENT_FRAMES",
    "RECIPE_LENS_FRAME_TIMEOUT_MS",
    "RECIPE_LENS_SAMPLE_INTERVAL_MS",
];

fn clear_env() {
    for variable in VARIABLES {
        env::remove_var(variable);
    }
}

#[test]
fn test_defaults() {
    let config = LensConfig::default();

    assert!((config.matching.confidence_threshold - 0.7).abs() < f32::EPSILON);
    assert!((config.matching.min_match_score - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.matching.top_k, 3);
    assert_eq!(config.detection.max_concurrent_frames, 4);
    assert_eq!(config.detection.frame_timeout(), None);
    assert_eq!(config.detection.sample_interval(), Duration::from_millis(500));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
    clear_env();

    let config = LensConfig::from_env().unwrap();

    assert_eq!(config, LensConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var("RECIPE_LENS_CATALOG", "/data/recipes.json");
    env::set_var("RECIPE_LENS_CONFIDENCE_THRESHOLD", "0.85");
    env::set_var("RECIPE_LENS_TOP_K", "5");
    env::set_var("RECIPE_LENS_MAX_CONCURRENT_FRAMES", "8");
    env::set_var("RECIPE_LENS_FRAME_TIMEOUT_MS", "250");

    let config = LensConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.catalog_path, Some(PathBuf::from("/data/recipes.json")));
    assert!((config.matching.confidence_threshold - 0.85).abs() < f32::EPSILON);
    assert_eq!(config.matching.top_k, 5);
    assert_eq!(config.detection.max_concurrent_frames, 8);
    assert_eq!(
        config.detection.frame_timeout(),
        Some(Duration::from_millis(250))
    );
}

#[test]
#[serial]
fn test_unparseable_values_fall_back_to_defaults() {
    clear_env();
    env::set_var("RECIPE_LENS_TOP_K", "many");
    env::set_var("RECIPE_LENS_SAMPLE_INTERVAL_MS", "-3");

    let config = LensConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.matching.top_k, 3);
    assert_eq!(config.detection.sample_interval_ms, 500);
}

#[test]
#[serial]
fn test_matching_and_detection_values_parse_alike() {
    clear_env();
    env::set_var("RECIPE_LENS_TOP_K", " 5 ");
    env::set_var("RECIPE_LENS_MAX_CONCURRENT_FRAMES", " 6 ");
    env::set_var("RECIPE_LENS_EXACT_WEIGHT", "heavy");
    env::set_var("RECIPE_LENS_FRAME_TIMEOUT_MS", "soon");

    let matching = MatchingConfig::from_env();
    let detection = DetectionConfig::from_env();
    clear_env();

    assert_eq!(matching.top_k, 5);
    assert_eq!(detection.max_concurrent_frames, 6);
    assert!((matching.exact_weight - MatchingConfig::default().exact_weight).abs() < f64::EPSILON);
    assert_eq!(detection.frame_timeout(), None);
}

#[test]
#[serial]
fn test_invalid_environment_fails_validation() {
    clear_env();
    env::set_var("RECIPE_LENS_CONFIDENCE_THRESHOLD", "1.5");

    let error = LensConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::InvalidRange(_)));
}

#[test]
fn test_matching_validation() {
    let zero_top_k = MatchingConfig {
        top_k: 0,
        ..MatchingConfig::default()
    };
    assert!(matches!(
        zero_top_k.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let partial_above_exact = MatchingConfig {
        partial_weight: 1.0,
        exact_weight: 0.5,
        ..MatchingConfig::default()
    };
    assert!(matches!(
        partial_above_exact.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));

    let nan_threshold = MatchingConfig {
        confidence_threshold: f32::NAN,
        ..MatchingConfig::default()
    };
    assert!(nan_threshold.validate().is_err());
}

#[test]
fn test_detection_validation() {
    let no_concurrency = DetectionConfig {
        max_concurrent_frames: 0,
        ..DetectionConfig::default()
    };
    let zero_timeout = DetectionConfig {
        frame_timeout_ms: Some(0),
        ..DetectionConfig::default()
    };

    assert!(no_concurrency.validate().is_err());
    assert!(zero_timeout.validate().is_err());
}

#[test]
fn test_config_errors_map_to_config_code() {
    let error = AppError::from(ConfigError::ValueOutOfRange("top_k must be at least 1"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(!error.is_recoverable());
}
