// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-lens
// ABOUTME: Provides matching, catalog, and schedule commands

pub mod catalog;
pub mod matching;
pub mod schedule;

use recipe_lens::catalog::RecipeCatalog;
use recipe_lens::config::LensConfig;
use recipe_lens::errors::{AppError, AppResult, ErrorCode};
use std::path::PathBuf;

/// Load the catalog named on the command line, falling back to configuration
pub fn load_catalog(config: &LensConfig, catalog: Option<PathBuf>) -> AppResult<RecipeCatalog> {
    let path = catalog
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "no recipe dataset given; pass --catalog or set RECIPE_LENS_CATALOG",
            )
        })?;
    Ok(RecipeCatalog::load_path(path)?)
}
