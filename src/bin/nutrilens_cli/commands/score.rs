// ABOUTME: Score command for nutrilens-cli
// ABOUTME: Reports the score, grade, and badge variant already attached to an analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use nutrilens::errors::AppResult;
use nutrilens::models::{BadgeVariant, FoodAnalysis, Grade};
use nutrilens::{get_score100, score_to_badge_variant, score_to_grade};
use serde::Serialize;

use crate::helpers::display::print_json;
use crate::helpers::input::read_json;

/// Score summary; all fields but the badge are absent when not analyzed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    analyzed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    score100: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade_label: Option<&'static str>,
    badge: BadgeVariant,
}

/// Print the score summary of an analysis
pub fn run(analysis: &str, compact: bool) -> AppResult<()> {
    let food: FoodAnalysis = read_json(analysis)?;
    let score100 = get_score100(&food);
    let grade = score100.map(score_to_grade);

    let report = ScoreReport {
        analyzed: score100.is_some(),
        score100,
        grade,
        grade_label: grade.map(Grade::label_ko),
        badge: score_to_badge_variant(score100.map(f64::from)),
    };
    print_json(&report, compact)
}
