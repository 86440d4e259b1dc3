// ABOUTME: Criterion benchmarks for the food scoring engine
// ABOUTME: Measures allergen matching, enrichment, and JSON round trips over generated analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Criterion benchmarks for the scoring engine.
//!
//! Enrichment runs once per photo in the app, so single-call latency matters
//! more than batch throughput; batches are included to catch regressions in
//! the regex-backed allergen classification.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrilens::allergen::expand_to_needles;
use nutrilens::models::{BodyGoal, FoodAnalysis, HealthDiet, UserProfile};
use nutrilens::{compute_hits, ensure_user_analysis};
use serde_json::json;

const DISHES: [&str; 6] = [
    "제육볶음",
    "크림파스타",
    "계란찜",
    "새우볶음밥",
    "된장찌개",
    "땅콩버터 토스트",
];
const INGREDIENTS: [&str; 8] = [
    "돼지고기",
    "생크림",
    "계란",
    "새우",
    "두부",
    "대파",
    "참기름",
    "밀가루",
];

/// Generate analyses with varied macros and ingredients
#[allow(clippy::cast_precision_loss)]
fn generate_analyses(count: usize) -> Vec<FoodAnalysis> {
    (0..count)
        .map(|index| {
            let ingredients: Vec<&str> = (0..4)
                .map(|offset| INGREDIENTS[(index + offset * 3) % INGREDIENTS.len()])
                .collect();
            let value = json!({
                "dishName": DISHES[index % DISHES.len()],
                "macros": {
                    "calories": 300.0 + ((index * 37) % 600) as f64,
                    "protein_g": ((index * 7) % 45) as f64,
                    "carbs_g": ((index * 11) % 110) as f64,
                    "fat_g": ((index * 5) % 40) as f64,
                    "sodium_mg": format!("{}", 200 + (index * 53) % 1600)
                },
                "ingredients": ingredients,
                "detections": [{"label": "bowl"}, {"label": "rice"}]
            });
            serde_json::from_value(value).unwrap_or_default()
        })
        .collect()
}

fn bench_profile() -> UserProfile {
    UserProfile::default()
        .with_nickname("벤치")
        .with_body_goal(BodyGoal::Diet)
        .with_health_diet(HealthDiet::LowSodium)
        .with_allergens(["우유", "난류(계란)", "새우", "대두", "땅콩"])
}

fn bench_needle_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("allergen_needles");
    for term in [
        "우유",
        "난류(계란)",
        "조개류(굴, 전복, 홍합 포함)",
        "고수",
        "Peanut",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(term), term, |b, term| {
            b.iter(|| expand_to_needles(black_box(term)));
        });
    }
    group.finish();
}

fn bench_compute_hits(c: &mut Criterion) {
    let profile = bench_profile();
    let analyses = generate_analyses(100);

    let mut group = c.benchmark_group("allergen_hits");
    group.throughput(Throughput::Elements(analyses.len() as u64));
    group.bench_function("100_analyses", |b| {
        b.iter(|| {
            for analysis in &analyses {
                let hits = compute_hits(profile.allergens.as_slice(), black_box(analysis));
                black_box(hits);
            }
        });
    });
    group.finish();
}

fn bench_ensure_user_analysis(c: &mut Criterion) {
    let profile = bench_profile();
    let mut group = c.benchmark_group("ensure_user_analysis");

    for count in [1_usize, 10, 100] {
        let analyses = generate_analyses(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("member", count), &analyses, |b, analyses| {
            b.iter(|| {
                for analysis in analyses {
                    black_box(ensure_user_analysis(black_box(analysis), Some(&profile)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("guest", count), &analyses, |b, analyses| {
            b.iter(|| {
                for analysis in analyses {
                    black_box(ensure_user_analysis(black_box(analysis), None));
                }
            });
        });
    }
    group.finish();
}

fn bench_json_pipeline(c: &mut Criterion) {
    let profile = bench_profile();
    let payloads: Vec<String> = generate_analyses(10)
        .iter()
        .filter_map(|a| serde_json::to_string(a).ok())
        .collect();

    c.bench_function("json_parse_enrich_embed", |b| {
        b.iter(|| {
            for payload in &payloads {
                let analysis: FoodAnalysis =
                    serde_json::from_str(black_box(payload)).unwrap_or_default();
                let result = ensure_user_analysis(&analysis, Some(&profile));
                let embedded = analysis.with_user_analysis(&result);
                black_box(serde_json::to_string(&embedded).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_needle_expansion,
    bench_compute_hits,
    bench_ensure_user_analysis,
    bench_json_pipeline,
);
criterion_main!(benches);
