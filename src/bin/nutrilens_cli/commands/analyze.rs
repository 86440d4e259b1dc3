// ABOUTME: Analyze command for nutrilens-cli
// ABOUTME: Enriches a food analysis for an optional user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use nutrilens::errors::AppResult;
use nutrilens::models::{FoodAnalysis, UserProfile};
use nutrilens::{ensure_user_analysis_with_config, AnalysisConfig};
use std::path::Path;
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::{read_json, read_optional_json};

/// Enrich an analysis and print the annotation, or the whole analysis when embedding
///
/// Thresholds are loaded strictly here: a bad `NUTRILENS_*` override fails the
/// command instead of silently falling back to defaults.
pub fn run(analysis: &str, profile: Option<&Path>, embed: bool, compact: bool) -> AppResult<()> {
    let config = AnalysisConfig::load()?;
    let food: FoodAnalysis = read_json(analysis)?;
    let user: Option<UserProfile> = read_optional_json(profile)?;

    let result = ensure_user_analysis_with_config(&food, user.as_ref(), &config);
    info!(
        score100 = result.score100,
        grade = %result.grade,
        guest = user.is_none(),
        "Analysis enriched"
    );

    if embed {
        print_json(&food.with_user_analysis(&result), compact)
    } else {
        print_json(&result, compact)
    }
}
