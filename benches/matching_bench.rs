// ABOUTME: Criterion benchmarks for aggregation and recipe matching
// ABOUTME: Measures scoring across catalog sizes on both sides of the parallel threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the matching engine.
//!
//! Catalog sizes straddle the size at which scoring moves onto the rayon pool.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_lens::core::errors::DetectionError;
use recipe_lens::core::models::{BoundingBox, DetectedIngredient, Recipe};
use recipe_lens::intelligence::{aggregate, RecipeMatcher};

const PANTRY: &[&str] = &[
    "tomato", "cheese", "basil", "egg", "flour", "milk", "butter", "garlic", "onion", "lemon",
    "rice", "chicken", "pepper", "salt", "sugar", "olive oil", "carrot", "potato", "cream",
    "eggplant", "cherry tomato", "parsley", "thyme", "beef stock",
];

fn generate_catalog(size: usize) -> Vec<Recipe> {
    (0..size)
        .map(|index| {
            let ingredients = (0..3 + index % 6)
                .map(|offset| PANTRY[(index * 7 + offset * 5) % PANTRY.len()]);
            Recipe::new(format!("Bench Recipe {index}"), ingredients)
        })
        .collect()
}

fn generate_detections(count: usize) -> Vec<DetectedIngredient> {
    (0..count)
        .map(|index| {
            let confidence = 0.5 + (index % 5) as f32 * 0.1;
            DetectedIngredient::new(
                PANTRY[(index * 3) % PANTRY.len()],
                confidence,
                BoundingBox::new(0.1, 0.1, 0.2, 0.2),
            )
            .unwrap()
        })
        .collect()
}

fn bench_find_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches");
    let matcher = RecipeMatcher::default();
    let detections = generate_detections(12);

    for size in [50_usize, 255, 256, 2_000, 20_000] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| matcher.find_matches(black_box(&detections), black_box(catalog)));
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for frames in [10_usize, 60, 240] {
        let batches: Vec<Vec<DetectedIngredient>> =
            (0..frames).map(|frame| generate_detections(4 + frame % 5)).collect();
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::from_parameter(frames), &batches, |b, batches| {
            b.iter(|| aggregate(black_box(batches).iter().cloned().map(Ok::<_, DetectionError>)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_matches, bench_aggregation);
criterion_main!(benches);
