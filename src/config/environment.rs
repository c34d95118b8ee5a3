// ABOUTME: Environment configuration for detection concurrency, sampling, and catalog location
// ABOUTME: Parses RECIPE_LENS_* variables into typed configuration with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RECIPE_LENS_CATALOG` | unset |
//! | `RECIPE_LENS_MAX_CONCURRENT_FRAMES` | 4 |
//! | `RECIPE_LENS_FRAME_TIMEOUT_MS` | unset (no timeout) |
//! | `RECIPE_LENS_SAMPLE_INTERVAL_MS` | 500 |
//!
//! Matching variables are documented on `MatchingConfig::from_env`.

use recipe_lens_core::constants::detection;
use recipe_lens_intelligence::config::{env_parse, env_parse_or, ConfigError, MatchingConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Frame detection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Maximum number of frames handed to the detector at once
    pub max_concurrent_frames: usize,
    /// Per-frame detector budget; `None` waits indefinitely
    pub frame_timeout_ms: Option<u64>,
    /// Interval between sampled video frames
    pub sample_interval_ms: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_concurrent_frames: detection::DEFAULT_MAX_CONCURRENT_FRAMES,
            frame_timeout_ms: None,
            sample_interval_ms: detection::DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl DetectionConfig {
    /// Load detection configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_concurrent_frames: env_parse_or(
                "RECIPE_LENS_MAX_CONCURRENT_FRAMES",
                detection::DEFAULT_MAX_CONCURRENT_FRAMES,
            ),
            frame_timeout_ms: env_parse("RECIPE_LENS_FRAME_TIMEOUT_MS"),
            sample_interval_ms: env_parse_or(
                "RECIPE_LENS_SAMPLE_INTERVAL_MS",
                detection::DEFAULT_SAMPLE_INTERVAL_MS,
            ),
        }
    }

    /// Per-frame timeout as a `Duration`
    #[must_use]
    pub fn frame_timeout(&self) -> Option<Duration> {
        self.frame_timeout_ms.map(Duration::from_millis)
    }

    /// Sampling interval as a `Duration`
    #[must_use]
    pub const fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    /// Validate detection settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for zero concurrency, zero
    /// interval, or a zero timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_frames == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_concurrent_frames must be at least 1",
            ));
        }
        if self.sample_interval_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "sample_interval_ms must be at least 1",
            ));
        }
        if self.frame_timeout_ms == Some(0) {
            return Err(ConfigError::ValueOutOfRange(
                "frame_timeout_ms must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

/// Complete recipe lens configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LensConfig {
    /// Scoring and ranking settings
    pub matching: MatchingConfig,
    /// Frame detection settings
    pub detection: DetectionConfig,
    /// Recipe dataset location
    pub catalog_path: Option<PathBuf>,
}

impl LensConfig {
    /// Load the full configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the loaded values fail validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            matching: MatchingConfig::from_env(),
            detection: DetectionConfig::from_env(),
            catalog_path: env::var_os("RECIPE_LENS_CATALOG").map(PathBuf::from),
        };
        config.validate()?;
        debug!(summary = %config.summary(), "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.validate()?;
        self.detection.validate()
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "threshold={} min_score={} top_k={} concurrency={} timeout={} interval={}ms catalog={}",
            self.matching.confidence_threshold,
            self.matching.min_match_score,
            self.matching.top_k,
            self.detection.max_concurrent_frames,
            self.detection
                .frame_timeout_ms
                .map_or_else(|| "none".to_owned(), |ms| format!("{ms}ms")),
            self.detection.sample_interval_ms,
            self.catalog_path
                .as_ref()
                .map_or_else(|| "unset".to_owned(), |path| path.display().to_string()),
        )
    }
}
