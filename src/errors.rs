// ABOUTME: Unified application error type with numeric error codes
// ABOUTME: Converts domain errors from detection, catalog, matching, and config into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain crates report failures through their own enums. At the application
//! boundary they are folded into `AppError`, which carries an `ErrorCode` for
//! programmatic handling and a human-readable message for display.

use recipe_lens_core::errors::{CatalogError, DetectionError, MatchError};
use recipe_lens_intelligence::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Data is not in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A value lies outside its permitted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A file or record could not be found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// No detection cleared the confidence threshold
    #[serde(rename = "NO_INGREDIENTS_DETECTED")]
    NoIngredientsDetected = 4001,
    /// No recipe scored above the minimum
    #[serde(rename = "NO_MATCHING_RECIPES")]
    NoMatchingRecipes = 4002,

    // Detection (5000-5999)
    /// The detector reported a failure
    #[serde(rename = "DETECTION_FAILED")]
    DetectionFailed = 5000,
    /// The detector did not answer in time
    #[serde(rename = "DETECTION_TIMEOUT")]
    DetectionTimeout = 5001,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,
    /// Required configuration is missing
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem operation failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9001,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::NoIngredientsDetected => "No ingredients were detected",
            Self::NoMatchingRecipes => "No recipes match the detected ingredients",
            Self::DetectionFailed => "Ingredient detection failed",
            Self::DetectionTimeout => "Ingredient detection timed out",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether callers should present an empty state rather than a failure
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::NoIngredientsDetected | Self::NoMatchingRecipes)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Whether callers should present an empty state rather than a failure
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.code.is_recoverable()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::MissingField { .. } => ErrorCode::MissingRequiredField,
            CatalogError::Malformed { .. } => ErrorCode::InvalidFormat,
            CatalogError::Io { .. } => ErrorCode::StorageError,
            CatalogError::UnsupportedFormat { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<DetectionError> for AppError {
    fn from(error: DetectionError) -> Self {
        let code = match &error {
            DetectionError::Timeout { .. } => ErrorCode::DetectionTimeout,
            DetectionError::InvalidConfidence { .. } => ErrorCode::ValueOutOfRange,
            DetectionError::Inference { .. }
            | DetectionError::MissingFrame { .. }
            | DetectionError::Unavailable { .. } => ErrorCode::DetectionFailed,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<MatchError> for AppError {
    fn from(error: MatchError) -> Self {
        let code = match &error {
            MatchError::NoIngredientsDetected { .. } => ErrorCode::NoIngredientsDetected,
            MatchError::NoMatchingRecipes { .. } => ErrorCode::NoMatchingRecipes,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, format!("{error:#}"))
    }
}
