// ABOUTME: Configuration error types for matching and detection settings
// ABOUTME: Defines error variants for invalid ranges and inconsistent weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for settings validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., threshold not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Weights are inconsistent with each other
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),
}
