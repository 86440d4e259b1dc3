// ABOUTME: Mapping between grades, 100-point scores, and display badge tiers
// ABOUTME: Reads existing scores from an analysis and converts grades to canonical scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # Food Scorer
//!
//! Three representations of "how good is this food for this user" exist side
//! by side: a five-level [`Grade`], a `score100` that the backend may or may
//! not have filled (sometimes as a numeric string), and a [`BadgeVariant`] for
//! the UI. All functions here are total; `None` means "not analyzed yet".

use nutrilens_core::coerce::finite_number;
use nutrilens_core::constants::{badge, scoring};
use nutrilens_core::models::{BadgeVariant, FoodAnalysis, Grade};
use serde_json::Value;

/// Canonical score for a typed grade, or the neutral score when there is none
#[must_use]
pub fn grade_to_score100(grade: Option<Grade>) -> u8 {
    grade.map_or(scoring::NEUTRAL_SCORE, Grade::score100)
}

/// Canonical score for a raw grade string; unknown strings score as neutral
#[must_use]
pub fn grade_str_to_score100(grade: &str) -> u8 {
    grade_to_score100(Grade::parse(grade))
}

/// Clamp to `0..=100` and round to the nearest integer
#[must_use]
pub fn clamp_score(score: f64) -> u8 {
    score
        .round()
        .clamp(f64::from(scoring::SCORE_MIN), f64::from(scoring::SCORE_MAX)) as u8
}

/// Grade for a 100-point score
#[must_use]
pub const fn score_to_grade(score100: u8) -> Grade {
    Grade::from_score100(score100)
}

/// Score already attached to an analysis, if any
///
/// Prefers a finite `score100` (number or numeric string), clamped and
/// rounded, then a recognized `grade`. Returns `None` when the analysis
/// carries no `userAnalysis` or neither field is usable.
#[must_use]
pub fn get_score100(analysis: &FoodAnalysis) -> Option<u8> {
    let user_analysis = analysis.user_analysis.as_ref()?;

    if let Some(score) = user_analysis.score100.as_ref().and_then(finite_number) {
        return Some(clamp_score(score));
    }

    user_analysis
        .grade
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Grade::parse)
        .map(Grade::score100)
}

/// Badge color tier for a score: 80+ success, 60+ warning, otherwise danger
#[must_use]
pub fn score_to_badge_variant(score: Option<f64>) -> BadgeVariant {
    match score {
        Some(s) if s.is_finite() => {
            if s >= badge::SUCCESS_MIN {
                BadgeVariant::Success
            } else if s >= badge::WARNING_MIN {
                BadgeVariant::Warning
            } else {
                BadgeVariant::Danger
            }
        }
        _ => BadgeVariant::Default,
    }
}
