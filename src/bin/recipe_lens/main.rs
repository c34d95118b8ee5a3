// ABOUTME: Recipe lens CLI - ranks recipes against recorded ingredient detections
// ABOUTME: Handles matching, catalog inspection, and frame schedule display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Rank recipes against a recorded detection session
//! recipe-lens match --catalog recipes.json --detections session.json
//!
//! # Same, with a stricter threshold and JSON output
//! recipe-lens match --catalog recipes.yaml --detections session.json --threshold 0.8 --json
//!
//! # List the recipes in a dataset
//! recipe-lens catalog --catalog recipes.json
//!
//! # Show which timestamps a 12 second clip is sampled at
//! recipe-lens schedule --duration-secs 12
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use recipe_lens::config::LensConfig;
use recipe_lens::errors::AppResult;
use recipe_lens::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-lens",
    version,
    about = "Recipe suggestions from detected ingredients",
    long_about = "Aggregates per-frame ingredient detections and ranks catalog recipes by how well they match."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank recipes against recorded detections
    Match {
        /// Recipe dataset (.json, .yaml or .yml); defaults to `RECIPE_LENS_CATALOG`
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// JSON array of frames, each an array of detections or null
        #[arg(long)]
        detections: PathBuf,

        /// Minimum confidence (exclusive) for a detection to count
        #[arg(long)]
        threshold: Option<f32>,

        /// Maximum number of recipes to show
        #[arg(long)]
        top_k: Option<usize>,

        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a summary of every recipe in a dataset
    Catalog {
        /// Recipe dataset (.json, .yaml or .yml); defaults to `RECIPE_LENS_CATALOG`
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the timestamps at which a video would be sampled
    Schedule {
        /// Video duration in seconds
        #[arg(long)]
        duration_secs: f64,

        /// Interval between samples; defaults to `RECIPE_LENS_SAMPLE_INTERVAL_MS`
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = LensConfig::from_env()?;
    debug!(summary = %config.summary(), "Recipe lens configuration");

    match cli.command {
        Command::Match {
            catalog,
            detections,
            threshold,
            top_k,
            json,
        } => {
            let request = commands::matching::MatchRequest {
                catalog,
                detections,
                threshold,
                top_k,
                json,
            };
            commands::matching::run(&config, request).await?;
        }
        Command::Catalog { catalog } => {
            commands::catalog::run(&config, catalog)?;
        }
        Command::Schedule {
            duration_secs,
            interval_ms,
        } => {
            commands::schedule::run(&config, duration_secs, interval_ms)?;
        }
    }

    Ok(())
}
