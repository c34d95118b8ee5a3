// ABOUTME: Catalog load error type for malformed or unreadable recipe datasets
// ABOUTME: Any error aborts the whole load so no partial catalog is ever exposed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while building a recipe catalog from raw records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A record lacks one of the required fields
    #[error("recipe record {record} is missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the record in the dataset
        record: usize,
        /// Serialized name of the missing field
        field: &'static str,
    },

    /// The dataset could not be parsed at all
    #[error("recipe dataset is malformed: {reason}")]
    Malformed {
        /// Parser-supplied description
        reason: String,
    },

    /// The dataset file could not be read
    #[error("failed to read recipe dataset '{path}': {reason}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The dataset file extension maps to no known format
    #[error("unsupported recipe dataset format for '{path}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Offending path
        path: String,
    },
}

impl CatalogError {
    /// Create a malformed-dataset error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
