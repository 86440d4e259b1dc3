// ABOUTME: Integration tests for grade, score, and badge conversions
// ABOUTME: Boundary checks at every grade threshold and score fallback from grade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::analysis;
use nutrilens::food_score::{clamp_score, grade_str_to_score100, grade_to_score100};
use nutrilens::models::{BadgeVariant, FoodAnalysis, Grade};
use nutrilens::{get_score100, score_to_badge_variant, score_to_grade};
use serde_json::json;

#[test]
fn test_grade_boundaries() {
    let cases = [
        (100, Grade::VeryGood),
        (90, Grade::VeryGood),
        (85, Grade::VeryGood),
        (84, Grade::Good),
        (70, Grade::Good),
        (69, Grade::Neutral),
        (55, Grade::Neutral),
        (54, Grade::Bad),
        (40, Grade::Bad),
        (39, Grade::VeryBad),
        (0, Grade::VeryBad),
    ];
    for (score, expected) in cases {
        assert_eq!(score_to_grade(score), expected, "score {score}");
    }
}

#[test]
fn test_grades_are_monotonic_over_the_whole_range() {
    let grades: Vec<Grade> = (0..=100).map(score_to_grade).collect();
    // Grade ordering is best-first, so grades never get better as the score drops
    assert!(grades.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_canonical_scores_round_trip_to_their_grade() {
    for grade in Grade::ALL {
        assert_eq!(score_to_grade(grade_to_score100(Some(grade))), grade);
    }
    assert_eq!(grade_str_to_score100("unknown"), 60);
}

#[test]
fn test_score_fallback_from_grade() {
    assert_eq!(get_score100(&analysis(json!({"userAnalysis": {"grade": "good"}}))), Some(75));
    assert_eq!(get_score100(&FoodAnalysis::default()), None);
    assert_eq!(get_score100(&analysis(json!({}))), None);
}

#[test]
fn test_score_accepts_numeric_strings_and_clamps() {
    let food = analysis(json!({"userAnalysis": {"score100": " 83.5 ", "grade": "very_bad"}}));
    assert_eq!(get_score100(&food), Some(84));

    let food = analysis(json!({"userAnalysis": {"score100": 1e12}}));
    assert_eq!(get_score100(&food), Some(100));
}

#[test]
fn test_clamp_rounds_half_away_from_zero() {
    assert_eq!(clamp_score(69.5), 70);
    assert_eq!(clamp_score(-0.4), 0);
    assert_eq!(clamp_score(f64::INFINITY), 100);
}

#[test]
fn test_badge_tiers() {
    assert_eq!(score_to_badge_variant(Some(100.0)), BadgeVariant::Success);
    assert_eq!(score_to_badge_variant(Some(80.0)), BadgeVariant::Success);
    assert_eq!(score_to_badge_variant(Some(60.0)), BadgeVariant::Warning);
    assert_eq!(score_to_badge_variant(Some(0.0)), BadgeVariant::Danger);
    assert_eq!(score_to_badge_variant(None), BadgeVariant::Default);
}
