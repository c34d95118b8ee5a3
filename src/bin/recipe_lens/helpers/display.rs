// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for recipe-lens
// ABOUTME: Renders ranked recipes and empty states as text or JSON

use recipe_lens::errors::AppResult;
use recipe_lens::intelligence::Aggregation;
use recipe_lens_core::errors::MatchError;
use recipe_lens_core::models::ScoredRecipe;
use serde_json::json;

/// Print detected ingredients and the ranked recipes
pub fn ranked_recipes(
    aggregation: &Aggregation,
    ranked: &[ScoredRecipe],
    as_json: bool,
) -> AppResult<()> {
    if as_json {
        let output = json!({
            "frames": aggregation.frame_count(),
            "ingredients": aggregation.ingredients(),
            "recipes": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_ingredients(aggregation);
    println!("\nSuggested recipes:");
    println!("{}", "=".repeat(80));
    for (rank, scored) in ranked.iter().enumerate() {
        let breakdown = &scored.breakdown;
        println!(
            "{}. {} ({}% match)",
            rank + 1,
            scored.recipe.name,
            scored.match_percent()
        );
        println!(
            "   {} exact, {} partial of {} ingredients | {} | prep {} | cook {}",
            breakdown.exact,
            breakdown.partial_only,
            breakdown.distinct_ingredients,
            scored.recipe.cuisine,
            scored.recipe.prep_time,
            scored.recipe.cook_time
        );
        if !scored.recipe.description.is_empty() {
            println!("   {}", scored.recipe.description);
        }
    }
    Ok(())
}

/// Print the empty state for a match run without results
pub fn empty_state(aggregation: &Aggregation, error: &MatchError, as_json: bool) -> AppResult<()> {
    let kind = match error {
        MatchError::NoIngredientsDetected { .. } => "no_ingredients_detected",
        MatchError::NoMatchingRecipes { .. } => "no_matching_recipes",
    };

    if as_json {
        let output = json!({
            "frames": aggregation.frame_count(),
            "ingredients": aggregation.ingredients(),
            "recipes": [],
            "empty_state": { "kind": kind, "message": error.to_string() },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_ingredients(aggregation);
    match error {
        MatchError::NoIngredientsDetected { .. } => {
            println!("\nNo ingredients detected. Try scanning again with better lighting.");
        }
        MatchError::NoMatchingRecipes { .. } => {
            println!("\nNo recipes match these ingredients yet.");
        }
    }
    Ok(())
}

fn print_ingredients(aggregation: &Aggregation) {
    println!(
        "Scanned {} frames, {} detections, {} distinct ingredients:",
        aggregation.frame_count(),
        aggregation.raw_detection_count(),
        aggregation.ingredients().len()
    );
    for ingredient in aggregation.ingredients() {
        println!(
            "   {:<24} {:>3}%",
            ingredient.name(),
            ingredient.confidence_percent()
        );
    }
}
