// ABOUTME: Core types and constants for the NutriLens food scoring engine
// ABOUTME: Foundation crate with boundary models, coercion helpers, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![deny(unsafe_code)]

//! # `NutriLens` Core
//!
//! Foundation crate providing the shared data model for the `NutriLens` scoring
//! engine. The vision backend and the profile store hand the engine loosely
//! typed JSON; this crate turns those shapes into explicit Rust types whose
//! optional fields never fail to deserialize, so the engine itself only ever
//! works over resolved primitives.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and `AppResult` for the I/O surfaces
//! - **constants**: grade thresholds, grade/score table, allergen catalog
//! - **coerce**: lenient number/string/list coercion used at the boundary
//! - **models**: `FoodAnalysis`, `UserProfile`, `UserAnalysis` and their enums

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Scoring constants and the allergen picker catalog
pub mod constants;

/// Lenient coercion helpers for loosely typed backend JSON
pub mod coerce;

/// Boundary data models (analysis input, user profile, enriched output)
pub mod models;
