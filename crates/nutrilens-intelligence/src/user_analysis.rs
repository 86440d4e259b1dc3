// ABOUTME: Enriches a food analysis into a complete personalized annotation
// ABOUTME: Heuristic guidance from macros and profile, merged field by field with backend data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # Analysis Enricher
//!
//! Given a [`FoodAnalysis`] (possibly carrying a partial `userAnalysis` from
//! the backend) and an optional [`UserProfile`] (absent for guests), produce
//! a [`UserAnalysis`] that can be rendered as-is:
//!
//! 1. Coerce calories, protein, carbs and fat to numbers (missing → 0).
//! 2. Take the existing score if there is one, otherwise a coarse default
//!    depending on whether calories were estimated.
//! 3. Derive the grade from the score.
//! 4. Run independent rule blocks for every guidance list.
//! 5. Replace any empty list with its fallback sentence.
//! 6. Merge with backend data, preferring the backend per field.
//!
//! The function is pure: inputs are not modified and no I/O happens.

use serde_json::Value;
use tracing::debug;

use nutrilens_core::coerce::{finite_number, string_entries};
use nutrilens_core::constants::display::DEFAULT_USER_NAME;
use nutrilens_core::models::{
    BodyGoal, FoodAnalysis, Grade, GuidanceField, HealthDiet, PartialUserAnalysis,
    ResolvedMacros, UserAnalysis, UserProfile,
};

use crate::allergen::compute_hits;
use crate::config::{AnalysisConfig, GuidanceThresholds};
use crate::food_score::{clamp_score, get_score100, score_to_grade};
use crate::messages;

/// Enrich an analysis using the global configuration
#[must_use]
pub fn ensure_user_analysis(
    analysis: &FoodAnalysis,
    profile: Option<&UserProfile>,
) -> UserAnalysis {
    ensure_user_analysis_with_config(analysis, profile, AnalysisConfig::global())
}

/// Enrich an analysis with an explicit configuration
#[must_use]
pub fn ensure_user_analysis_with_config(
    analysis: &FoodAnalysis,
    profile: Option<&UserProfile>,
    config: &AnalysisConfig,
) -> UserAnalysis {
    let local = build_local_analysis(analysis, profile, config);

    let result = match &analysis.user_analysis {
        Some(backend) => merge_with_backend(local, backend),
        None => local,
    };

    debug!(
        dish = analysis.dish_name.as_deref().unwrap_or_default(),
        score100 = result.score100,
        grade = %result.grade,
        has_backend = analysis.user_analysis.is_some(),
        has_profile = profile.is_some(),
        "Enriched user analysis"
    );
    result
}

/// Heuristic annotation from macros and profile alone (steps 1 to 5)
///
/// Every list in the result is non-empty.
#[must_use]
pub fn build_local_analysis(
    analysis: &FoodAnalysis,
    profile: Option<&UserProfile>,
    config: &AnalysisConfig,
) -> UserAnalysis {
    let macros = analysis.macros.resolve();

    let default_score = if macros.calories > 0.0 {
        config.scoring.score_with_data
    } else {
        config.scoring.score_without_data
    };
    let score100 = clamp_score(f64::from(get_score100(analysis).unwrap_or(default_score)));
    let grade = score_to_grade(score100);

    let rules = GuidanceRules {
        macros,
        profile,
        thresholds: &config.guidance,
    };
    let (pros, cons) = rules.pros_and_cons();
    let allergen_hits =
        profile.map_or_else(Vec::new, |p| compute_hits(p.allergens.as_slice(), analysis));

    let mut result = UserAnalysis {
        grade,
        score100,
        pros,
        cons,
        goal_fit: rules.goal_fit(),
        diet_fit: rules.diet_fit(),
        health_impact: rules.health_impact(),
        reasons: rules.reasons(grade, score100),
        warnings: allergen_warnings(&allergen_hits),
        alternatives: rules.alternatives(),
        tips: photo_tips(),
    };

    for field in GuidanceField::ALL {
        let list = result.field_mut(field);
        ensure1(list, messages::fallback(field));
    }
    result
}

/// Substitute the fallback sentence into an empty list
pub fn ensure1(list: &mut Vec<String>, fallback: &str) {
    if list.is_empty() {
        list.push(fallback.to_owned());
    }
}

/// Merge backend-supplied fields over a locally generated annotation (step 6)
///
/// Field-independent: a backend value wins only for the field it validly
/// supplies.
/// - `grade`: a recognized grade string
/// - `score100`: a finite JSON number, clamped and rounded
/// - lists: at least one non-empty string entry (other entries dropped)
#[must_use]
pub fn merge_with_backend(mut local: UserAnalysis, backend: &PartialUserAnalysis) -> UserAnalysis {
    if let Some(grade) = backend
        .grade
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Grade::parse)
    {
        local.grade = grade;
    }

    if let Some(score) = backend
        .score100
        .as_ref()
        .filter(|v| v.is_number())
        .and_then(finite_number)
    {
        local.score100 = clamp_score(score);
    }

    for field in GuidanceField::ALL {
        let supplied = backend.field(field).map(string_entries).unwrap_or_default();
        if !supplied.is_empty() {
            *local.field_mut(field) = supplied;
        }
    }
    local
}

fn allergen_warnings(allergen_hits: &[String]) -> Vec<String> {
    if allergen_hits.is_empty() {
        vec![messages::warnings::PHOTO_ESTIMATE.to_owned()]
    } else {
        vec![messages::warnings::allergen_hits(allergen_hits)]
    }
}

fn photo_tips() -> Vec<String> {
    vec![
        messages::tips::CENTERED_BRIGHT.to_owned(),
        messages::tips::NUTRITION_LABEL.to_owned(),
    ]
}

/// Rule blocks over resolved macros and the optional profile
struct GuidanceRules<'a> {
    macros: ResolvedMacros,
    profile: Option<&'a UserProfile>,
    thresholds: &'a GuidanceThresholds,
}

impl GuidanceRules<'_> {
    fn display_name(&self) -> &str {
        self.profile
            .map_or(DEFAULT_USER_NAME, UserProfile::display_name)
    }

    fn sodium_high(&self) -> Option<f64> {
        self.macros
            .sodium_mg
            .filter(|sodium| *sodium > self.thresholds.sodium_high_mg)
    }

    fn protein_low(&self) -> bool {
        self.macros.protein_g > 0.0 && self.macros.protein_g < self.thresholds.protein_low_g
    }

    fn pros_and_cons(&self) -> (Vec<String>, Vec<String>) {
        let m = &self.macros;
        let t = self.thresholds;
        let mut pros = Vec::new();
        let mut cons = Vec::new();

        if m.protein_g >= t.protein_high_g {
            pros.push(messages::pros::protein_rich(m.protein_g));
        }
        if self.protein_low() {
            cons.push(messages::cons::protein_low(m.protein_g));
        }
        if m.fat_g >= t.fat_high_g {
            cons.push(messages::cons::fat_high(m.fat_g));
        }
        if m.carbs_g >= t.carbs_high_g {
            cons.push(messages::cons::carbs_high(m.carbs_g));
        }
        if let Some(sodium) = self.sodium_high() {
            cons.push(messages::cons::sodium_high(sodium));
        }
        (pros, cons)
    }

    fn goal_fit(&self) -> Vec<String> {
        let m = &self.macros;
        let t = self.thresholds;
        let name = self.display_name();
        let goal = self.profile.and_then(|p| p.body_goal);

        match goal {
            Some(BodyGoal::Diet) => {
                let mut out = vec![messages::goal_fit::diet(name)];
                if m.calories > t.diet_calorie_limit {
                    out.push(messages::goal_fit::diet_calories_high(m.calories));
                }
                out
            }
            Some(BodyGoal::Bulking) => {
                let mut out = vec![messages::goal_fit::bulking(name)];
                if m.protein_g < t.bulking_protein_min_g {
                    out.push(messages::goal_fit::bulking_protein_low(m.protein_g));
                }
                out
            }
            Some(BodyGoal::Maintenance) => vec![messages::goal_fit::maintenance(name)],
            Some(BodyGoal::LeanBulk | BodyGoal::Recomp | BodyGoal::Other) | None => {
                vec![messages::goal_fit::general(name)]
            }
        }
    }

    fn diet_fit(&self) -> Vec<String> {
        let m = &self.macros;
        let t = self.thresholds;
        let diet = self.profile.and_then(|p| p.health_diet);

        match diet {
            Some(HealthDiet::LowCarb) => {
                let mut out = vec![messages::diet_fit::LOW_CARB.to_owned()];
                if m.carbs_g > t.low_carb_limit_g {
                    out.push(messages::diet_fit::carbs_over_limit(m.carbs_g));
                }
                out
            }
            Some(HealthDiet::LowSodium) => {
                let mut out = vec![messages::diet_fit::LOW_SODIUM.to_owned()];
                if let Some(sodium) = self.sodium_high() {
                    out.push(messages::diet_fit::sodium_over_limit(sodium));
                }
                out
            }
            Some(HealthDiet::HighProtein) => {
                let mut out = vec![messages::diet_fit::HIGH_PROTEIN.to_owned()];
                if m.protein_g < t.protein_high_g {
                    out.push(messages::diet_fit::protein_under_target(m.protein_g));
                }
                out
            }
            Some(HealthDiet::LowFat) => {
                let mut out = vec![messages::diet_fit::LOW_FAT.to_owned()];
                if m.fat_g > t.low_fat_limit_g {
                    out.push(messages::diet_fit::fat_over_limit(m.fat_g));
                }
                out
            }
            Some(
                HealthDiet::Diabetic
                | HealthDiet::IntermittentFasting
                | HealthDiet::AntiInflammatory
                | HealthDiet::NoneHealth
                | HealthDiet::Other,
            )
            | None => vec![messages::diet_fit::GENERAL.to_owned()],
        }
    }

    fn health_impact(&self) -> Vec<String> {
        let mut out = vec![messages::health_impact::PROCESSED_FOOD.to_owned()];
        if self.macros.calories > 0.0 {
            out.push(messages::health_impact::estimated_calories(
                self.macros.calories,
            ));
        }
        out
    }

    fn alternatives(&self) -> Vec<String> {
        let mut out = vec![messages::alternatives::ADD_VEGETABLES.to_owned()];
        if self.macros.protein_g < self.thresholds.protein_high_g {
            out.push(messages::alternatives::ADD_PROTEIN.to_owned());
        }
        if self.macros.fat_g > self.thresholds.fat_high_g {
            out.push(messages::alternatives::REDUCE_FAT.to_owned());
        }
        out
    }

    fn reasons(&self, grade: Grade, score100: u8) -> Vec<String> {
        let mut out = vec![messages::reasons::score(grade, score100)];
        if self.macros.protein_g >= self.thresholds.protein_high_g {
            out.push(messages::reasons::PROTEIN_RICH.to_owned());
        }
        if self.protein_low() {
            out.push(messages::reasons::PROTEIN_LOW.to_owned());
        }
        if self.macros.fat_g >= self.thresholds.fat_high_g {
            out.push(messages::reasons::FAT_HIGH.to_owned());
        }
        if self.sodium_high().is_some() {
            out.push(messages::reasons::SODIUM_HIGH.to_owned());
        }
        out
    }
}
