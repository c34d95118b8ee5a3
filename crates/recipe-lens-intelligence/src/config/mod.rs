// ABOUTME: Configuration module for recipe-lens-intelligence crate
// ABOUTME: Re-exports matching configuration, its error type, and environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing
pub mod env;
/// Configuration validation errors
pub mod error;
/// Recipe matching thresholds and weights
pub mod matching;

pub use env::{env_parse, env_parse_or};
pub use error::ConfigError;
pub use matching::MatchingConfig;
