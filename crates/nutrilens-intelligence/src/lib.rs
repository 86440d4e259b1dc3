// ABOUTME: Food scoring and analysis enrichment engine for NutriLens
// ABOUTME: Allergen matching, score/grade mapping, and personalized guidance generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # `NutriLens` Intelligence
//!
//! Pure, synchronous engine that turns a vision-model food estimate plus an
//! optional user profile into a fully populated
//! [`UserAnalysis`](nutrilens_core::models::UserAnalysis). Nothing in
//! this crate performs I/O; the only shared state is the lazily loaded
//! [`AnalysisConfig`] and the compiled allergen patterns.
//!
//! ## Modules
//!
//! - **allergen**: synonym groups, needle expansion and hit detection
//! - **`food_score`**: grade/score/badge conversions
//! - **`user_analysis`**: the enricher (`ensure_user_analysis`)
//! - **messages**: the Korean guidance sentence catalog
//! - **config**: guidance thresholds and default scores

/// Allergen synonym groups and substring matching
pub mod allergen;

/// Analysis configuration with environment overrides
pub mod config;

/// Grade, score and badge conversions
pub mod food_score;

/// Guidance sentence catalog
pub mod messages;

/// Analysis enrichment
pub mod user_analysis;

pub use allergen::{compute_hits, AllergenGroup};
pub use config::{AnalysisConfig, ConfigError};
pub use food_score::{get_score100, score_to_badge_variant, score_to_grade};
pub use user_analysis::{ensure_user_analysis, ensure_user_analysis_with_config};
