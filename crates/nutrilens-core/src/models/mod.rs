// ABOUTME: Boundary data models for the NutriLens scoring engine
// ABOUTME: Re-exports FoodAnalysis, UserProfile, UserAnalysis and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! # Data Models
//!
//! Three shapes cross the engine boundary:
//!
//! - `FoodAnalysis`: produced per photo by the vision backend, may already
//!   carry a partial `userAnalysis`
//! - `UserProfile`: read-only preferences from the profile store (absent for
//!   guests)
//! - `UserAnalysis`: the fully populated annotation the engine returns
//!
//! Input models deserialize leniently (see [`crate::coerce`]); the output
//! model is strict.

mod analysis;
mod profile;
mod user_analysis;

// Analysis input
pub use analysis::{Detection, FoodAnalysis, Macros, ResolvedMacros};

// Profile input
pub use profile::{BodyGoal, HealthDiet, LifestyleDiet, UserProfile};

// Enriched output
pub use user_analysis::{BadgeVariant, Grade, GuidanceField, PartialUserAnalysis, UserAnalysis};
