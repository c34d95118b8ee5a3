// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Match command replaying recorded detections through the pipeline
// ABOUTME: Aggregates frames, ranks recipes, and prints results or the empty state

use crate::helpers::display;
use recipe_lens::config::LensConfig;
use recipe_lens::detection::{DetectionPipeline, RecordedDetector};
use recipe_lens::errors::{AppError, AppResult};
use recipe_lens::intelligence::RecipeMatcher;
use recipe_lens::logging::AppLogger;
use recipe_lens_core::models::ScoredRecipe;
use std::path::PathBuf;
use tokio::fs;

/// Arguments of the `match` command
pub struct MatchRequest {
    pub catalog: Option<PathBuf>,
    pub detections: PathBuf,
    pub threshold: Option<f32>,
    pub top_k: Option<usize>,
    pub json: bool,
}

/// Run the `match` command
pub async fn run(config: &LensConfig, request: MatchRequest) -> AppResult<()> {
    let catalog = super::load_catalog(config, request.catalog)?;

    let recording = fs::read_to_string(&request.detections).await?;
    let detector = RecordedDetector::from_json_str(&recording)?;
    let frames = detector.frame_ids();
    let pipeline = DetectionPipeline::new(detector, config.detection.clone());
    let aggregation = pipeline.scan(&frames).await?;

    let mut matching = config.matching.clone();
    if let Some(threshold) = request.threshold {
        matching.confidence_threshold = threshold;
    }
    if let Some(top_k) = request.top_k {
        matching.top_k = top_k;
    }
    matching.validate()?;

    let matcher = RecipeMatcher::new(matching);
    let detected = matcher.detected_keys(aggregation.ingredients()).len();
    match matcher.find_matches(aggregation.ingredients(), catalog.recipes()) {
        Ok(ranked) => {
            AppLogger::log_match_run(
                detected,
                ranked.len(),
                ranked.first().map(ScoredRecipe::score),
            );
            display::ranked_recipes(&aggregation, &ranked, request.json)
        }
        Err(e) if e.is_recoverable() => {
            AppLogger::log_match_run(detected, 0, None);
            display::empty_state(&aggregation, &e, request.json)
        }
        Err(e) => Err(AppError::from(e)),
    }
}
