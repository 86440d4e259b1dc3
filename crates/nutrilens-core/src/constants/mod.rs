// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Grade thresholds, the grade to score table, and the allergen picker catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Constants module
//!
//! Fixed values shared by the scoring engine and its callers. Grade thresholds
//! and the grade/score table are not configurable: the rendering layer relies
//! on them being identical everywhere.

/// Score range and grade boundaries
pub mod scoring {
    /// Lowest possible `score100`
    pub const SCORE_MIN: u8 = 0;
    /// Highest possible `score100`
    pub const SCORE_MAX: u8 = 100;

    /// Minimum score for `very_good`
    pub const VERY_GOOD_MIN: u8 = 85;
    /// Minimum score for `good`
    pub const GOOD_MIN: u8 = 70;
    /// Minimum score for `neutral`
    pub const NEUTRAL_MIN: u8 = 55;
    /// Minimum score for `bad`
    pub const BAD_MIN: u8 = 40;

    /// Canonical score for a `very_good` grade
    pub const VERY_GOOD_SCORE: u8 = 90;
    /// Canonical score for a `good` grade
    pub const GOOD_SCORE: u8 = 75;
    /// Canonical score for a `neutral` grade, also used for unknown grades
    pub const NEUTRAL_SCORE: u8 = 60;
    /// Canonical score for a `bad` grade
    pub const BAD_SCORE: u8 = 40;
    /// Canonical score for a `very_bad` grade
    pub const VERY_BAD_SCORE: u8 = 20;
}

/// Badge color tiers for score display
pub mod badge {
    /// Minimum score for the `success` badge
    pub const SUCCESS_MIN: f64 = 80.0;
    /// Minimum score for the `warning` badge
    pub const WARNING_MIN: f64 = 60.0;
}

/// Allergen matching
pub mod allergen {
    /// Needles shorter than this (in characters) are discarded
    pub const MIN_NEEDLE_CHARS: usize = 2;

    /// Characters removed by normalization in addition to whitespace
    pub const STRIP_CHARS: &[char] = &[
        '(', ')', '[', ']', '{', '}', '.', ',', '·', '/', '\\', '-', '_', '\'', '"', '!', '?', ':',
        ';', '+', '&', '*', '~', '|', '<', '>', '@', '#', '%', '^', '=', '`', '、', '，', '。',
    ];

    /// Allergen labels offered by the profile screen picker
    ///
    /// Follows the Korean food labelling list of designated allergens, with the
    /// English label for display in the language toggle.
    pub const CATALOG: &[(&str, &str)] = &[
        ("난류(계란)", "Egg"),
        ("우유", "Milk"),
        ("메밀", "Buckwheat"),
        ("땅콩", "Peanut"),
        ("대두", "Soybean"),
        ("밀", "Wheat"),
        ("고등어", "Mackerel"),
        ("게", "Crab"),
        ("새우", "Shrimp"),
        ("돼지고기", "Pork"),
        ("복숭아", "Peach"),
        ("토마토", "Tomato"),
        ("아황산류", "Sulfites"),
        ("호두", "Walnut"),
        ("닭고기", "Chicken"),
        ("쇠고기", "Beef"),
        ("오징어", "Squid"),
        ("조개류(굴, 전복, 홍합 포함)", "Shellfish"),
        ("잣", "Pine nut"),
        ("참깨", "Sesame"),
    ];
}

/// Display defaults
pub mod display {
    /// Display name used when the profile carries neither nickname nor name
    pub const DEFAULT_USER_NAME: &str = "사용자";
}
