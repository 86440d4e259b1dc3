// ABOUTME: User profile preferences consumed read-only by the scoring engine
// ABOUTME: UserProfile plus BodyGoal, HealthDiet and LifestyleDiet enums with lossy parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::constants::display::DEFAULT_USER_NAME;

/// Implements a lossy `Deserialize` that maps any non-matching value to `Other`
macro_rules! lossy_deserialize {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = Value::deserialize(deserializer)?;
                Ok(value.as_str().map_or(Self::Other, Self::from_str_lossy))
            }
        }
    };
}

/// Body composition goal
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyGoal {
    /// Weight loss
    Diet,
    /// Muscle gain with a caloric surplus
    Bulking,
    /// Muscle gain with a small surplus
    LeanBulk,
    /// Keep current weight
    Maintenance,
    /// Body recomposition
    Recomp,
    /// Unrecognized value
    Other,
}

impl BodyGoal {
    /// Parse body goal from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "diet" => Self::Diet,
            "bulking" => Self::Bulking,
            "lean_bulk" => Self::LeanBulk,
            "maintenance" => Self::Maintenance,
            "recomp" => Self::Recomp,
            _ => Self::Other,
        }
    }
}

lossy_deserialize!(BodyGoal);

/// Health-motivated diet
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthDiet {
    /// Sodium restriction
    LowSodium,
    /// Carbohydrate restriction
    LowCarb,
    /// Blood sugar management
    Diabetic,
    /// Fat restriction
    LowFat,
    /// Protein emphasis
    HighProtein,
    /// Time-restricted eating
    IntermittentFasting,
    /// Anti-inflammatory eating
    AntiInflammatory,
    /// No health diet selected
    NoneHealth,
    /// Unrecognized value
    Other,
}

impl HealthDiet {
    /// Parse health diet from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low_sodium" => Self::LowSodium,
            "low_carb" => Self::LowCarb,
            "diabetic" => Self::Diabetic,
            "low_fat" => Self::LowFat,
            "high_protein" => Self::HighProtein,
            "intermittent_fasting" => Self::IntermittentFasting,
            "anti_inflammatory" => Self::AntiInflammatory,
            "none_health" => Self::NoneHealth,
            _ => Self::Other,
        }
    }
}

lossy_deserialize!(HealthDiet);

/// Lifestyle or ethical diet. Stored on the profile, not used for scoring.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleDiet {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Fish but no meat
    Pescatarian,
    /// Mostly plant based
    Flexitarian,
    /// Very low carbohydrate
    Keto,
    /// Paleolithic diet
    Paleo,
    /// Mediterranean diet
    Mediterranean,
    /// No lifestyle diet selected
    NoneLifestyle,
    /// Unrecognized value
    Other,
}

impl LifestyleDiet {
    /// Parse lifestyle diet from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Self::Vegan,
            "vegetarian" => Self::Vegetarian,
            "pescatarian" => Self::Pescatarian,
            "flexitarian" => Self::Flexitarian,
            "keto" => Self::Keto,
            "paleo" => Self::Paleo,
            "mediterranean" => Self::Mediterranean,
            "none_lifestyle" => Self::NoneLifestyle,
            _ => Self::Other,
        }
    }
}

lossy_deserialize!(LifestyleDiet);

/// Preference fields of a signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Profile identifier in the profile store
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Preferred display name
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nickname: Option<String>,
    /// Account name
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Body composition goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_goal: Option<BodyGoal>,
    /// Health diet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_diet: Option<HealthDiet>,
    /// Lifestyle diet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle_diet: Option<LifestyleDiet>,
    /// Allergens in the order the user entered or picked them
    #[serde(default, deserialize_with = "coerce::string_list")]
    pub allergens: Vec<String>,
}

impl UserProfile {
    /// Name used in personalized sentences: nickname, then name, then a generic fallback
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(DEFAULT_USER_NAME)
    }

    /// Set the body goal
    #[must_use]
    pub const fn with_body_goal(mut self, goal: BodyGoal) -> Self {
        self.body_goal = Some(goal);
        self
    }

    /// Set the health diet
    #[must_use]
    pub const fn with_health_diet(mut self, diet: HealthDiet) -> Self {
        self.health_diet = Some(diet);
        self
    }

    /// Set the allergen list
    #[must_use]
    pub fn with_allergens<I, S>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergens = allergens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the nickname
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }
}
