// ABOUTME: Shared test utilities for NutriLens integration tests
// ABOUTME: Quiet logging setup and JSON fixture builders for analyses and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use nutrilens::models::{FoodAnalysis, UserProfile};
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deserialize an analysis from inline JSON
pub fn analysis(value: Value) -> FoodAnalysis {
    serde_json::from_value(value).expect("analysis fixture must deserialize")
}

/// Deserialize a profile from inline JSON
pub fn profile(value: Value) -> UserProfile {
    serde_json::from_value(value).expect("profile fixture must deserialize")
}

/// A typical estimate for a pork stir-fry lunch
pub fn jeyuk_analysis_json() -> Value {
    json!({
        "dishName": "제육볶음",
        "macros": {
            "calories": 720,
            "protein_g": 32,
            "carbs_g": 58,
            "fat_g": 34,
            "sodium_mg": 1450
        },
        "ingredients": ["돼지고기", "고추장", "양파", "대파", "참기름"],
        "allergens": ["대두", "밀"],
        "detections": [{"label": "pork", "confidence": 0.91}, {"label": "rice"}],
        "imageId": "img_42"
    })
}

/// A dieting user with a low-sodium diet and two allergens
pub fn dieter_profile_json() -> Value {
    json!({
        "id": "u_1",
        "nickname": "민지",
        "bodyGoal": "diet",
        "healthDiet": "low_sodium",
        "lifestyleDiet": "none_lifestyle",
        "allergens": ["대두", "새우"]
    })
}

/// Analyses with a spread of malformed and sparse shapes
pub fn messy_analyses() -> Vec<FoodAnalysis> {
    vec![
        analysis(json!({})),
        analysis(json!({"dishName": null, "macros": null})),
        analysis(json!({"dishName": 42, "macros": "lots", "ingredients": "egg"})),
        analysis(json!({"macros": {"calories": "abc", "protein_g": [], "fat_g": {"x": 1}}})),
        analysis(json!({"macros": {"calories": -50, "protein_g": 1e6}})),
        analysis(json!({"userAnalysis": {"score100": 1e9, "grade": 7, "pros": "yes"}})),
        analysis(json!({"userAnalysis": {"score100": -3.7, "tips": [null, "  ", "사진 팁"]}})),
        analysis(jeyuk_analysis_json()),
    ]
}

/// Profiles from guest to fully specified
pub fn sample_profiles() -> Vec<Option<UserProfile>> {
    vec![
        None,
        Some(profile(json!({}))),
        Some(profile(json!({"bodyGoal": "bulking", "healthDiet": "high_protein"}))),
        Some(profile(json!({
            "bodyGoal": "maintenance",
            "healthDiet": "low_carb",
            "allergens": ["우유"]
        }))),
        Some(profile(json!({"bodyGoal": "space_travel", "healthDiet": 3, "allergens": "peanut"}))),
        Some(profile(dieter_profile_json())),
    ]
}
