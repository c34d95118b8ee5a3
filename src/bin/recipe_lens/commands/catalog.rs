// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Catalog command listing the recipes in a dataset
// ABOUTME: Prints one summary line per recipe in dataset order

use recipe_lens::config::LensConfig;
use recipe_lens::errors::AppResult;
use std::path::PathBuf;

/// Run the `catalog` command
pub fn run(config: &LensConfig, catalog: Option<PathBuf>) -> AppResult<()> {
    let catalog = super::load_catalog(config, catalog)?;

    println!(
        "{} recipes (loaded {})",
        catalog.len(),
        catalog.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("{}", "=".repeat(80));
    for recipe in &catalog {
        println!(
            "{:<40} {:<12} {:>2} ingredients  prep {}  cook {}",
            recipe.name,
            recipe.cuisine,
            recipe.ingredients.len(),
            recipe.prep_time,
            recipe.cook_time
        );
    }
    Ok(())
}
