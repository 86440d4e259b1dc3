// ABOUTME: Main library entry point for the NutriLens food scoring engine
// ABOUTME: Re-exports the core models and the enrichment engine, and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # `NutriLens`
//!
//! Personalized food scoring. A vision model estimates what is on a plate
//! (dish name, macros, ingredients, detections); this crate turns that
//! estimate plus an optional user profile into a grade, a 0-100 score and
//! a set of short Korean guidance sentences.
//!
//! ## Architecture
//!
//! - **core** (`nutrilens-core`): boundary models, lenient coercion, errors
//! - **intelligence** (`nutrilens-intelligence`): allergen matcher, food
//!   scorer and the analysis enricher
//! - **logging**: tracing subscriber setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilens::models::{BodyGoal, FoodAnalysis, UserProfile};
//! use nutrilens::ensure_user_analysis;
//!
//! let analysis: FoodAnalysis = serde_json::from_str(
//!     r#"{"dishName": "제육볶음", "macros": {"calories": 720, "protein_g": 32}}"#,
//! )?;
//! let profile = UserProfile::default().with_body_goal(BodyGoal::Diet);
//!
//! let result = ensure_user_analysis(&analysis, Some(&profile));
//! println!("{} ({})", result.score100, result.grade);
//! # Ok::<(), serde_json::Error>(())
//! ```

/// Structured logging configuration
pub mod logging;

pub use nutrilens_core::{coerce, constants, errors, models};
pub use nutrilens_intelligence::{
    allergen, config, food_score, messages, user_analysis, AnalysisConfig,
};
pub use nutrilens_intelligence::{
    compute_hits, ensure_user_analysis, ensure_user_analysis_with_config, get_score100,
    score_to_badge_variant, score_to_grade,
};
