// ABOUTME: Food analysis models produced by the vision backend for each photo
// ABOUTME: FoodAnalysis, Macros, Detection, and the resolved macro snapshot used by scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::user_analysis::{PartialUserAnalysis, UserAnalysis};
use crate::coerce::{self, finite_number, n};

/// Nutrition estimate for one dish
///
/// Every field is kept as raw JSON: the backend sends numbers, numeric
/// strings, `null`s and occasionally free text. Use [`Macros::resolve`] to get
/// numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Value>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<Value>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<Value>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<Value>,
    /// Sodium in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<Value>,
    /// Sugar in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<Value>,
    /// Saturated fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat_g: Option<Value>,
    /// Trans fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trans_fat_g: Option<Value>,
    /// Cholesterol in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cholesterol_mg: Option<Value>,
    /// Dietary fiber in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<Value>,
}

/// Macro values after coercion
///
/// The four core macros default to `0.0` when missing or malformed. Sodium
/// stays optional because "no sodium data" and "zero sodium" lead to
/// different guidance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedMacros {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Sodium in milligrams, when the backend supplied a finite value
    pub sodium_mg: Option<f64>,
}

impl Macros {
    /// Coerce the raw macro fields into numbers
    #[must_use]
    pub fn resolve(&self) -> ResolvedMacros {
        ResolvedMacros {
            calories: n(self.calories.as_ref()),
            protein_g: n(self.protein_g.as_ref()),
            carbs_g: n(self.carbs_g.as_ref()),
            fat_g: n(self.fat_g.as_ref()),
            sodium_mg: self.sodium_mg.as_ref().and_then(finite_number),
        }
    }
}

/// Single object-detection hit from the vision model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected label, e.g. "계란" or "rice"
    pub label: String,
}

/// Per-photo analysis result from the vision backend
///
/// Unknown top-level keys are preserved in `extra` so a caller can re-emit the
/// analysis with the enriched `userAnalysis` embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    /// Dish name as recognized by the model
    #[serde(
        default,
        deserialize_with = "coerce::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dish_name: Option<String>,
    /// Nutrition estimate
    #[serde(default, deserialize_with = "coerce::lenient")]
    pub macros: Macros,
    /// Recognized ingredients
    #[serde(
        default,
        deserialize_with = "coerce::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ingredients: Vec<String>,
    /// Allergens declared by the backend
    #[serde(
        default,
        deserialize_with = "coerce::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allergens: Vec<String>,
    /// Object-detection hits
    #[serde(
        default,
        deserialize_with = "detections",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub detections: Vec<Detection>,
    /// Annotation already present on the analysis (possibly partial)
    #[serde(
        default,
        deserialize_with = "coerce::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_analysis: Option<PartialUserAnalysis>,
    /// Remaining backend fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodAnalysis {
    /// Create an analysis for a named dish with no other data
    #[must_use]
    pub fn named(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: Some(dish_name.into()),
            ..Self::default()
        }
    }

    /// Replace the embedded annotation with a fully enriched one
    #[must_use]
    pub fn with_user_analysis(mut self, analysis: &UserAnalysis) -> Self {
        self.user_analysis = Some(PartialUserAnalysis::from(analysis));
        self
    }
}

/// Keep only detection objects that carry a non-empty string label
fn detections<'de, D>(deserializer: D) -> Result<Vec<Detection>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .filter_map(|item| item.get("label").and_then(Value::as_str))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| Detection {
            label: label.to_owned(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_total_eq<T: Eq>() {}

    #[test]
    fn test_raw_json_models_have_total_equality() {
        assert_total_eq::<Macros>();
        assert_total_eq::<FoodAnalysis>();
        assert_total_eq::<PartialUserAnalysis>();
    }

    #[test]
    fn test_malformed_fields_degrade_to_absent() {
        let analysis: FoodAnalysis = serde_json::from_value(json!({
            "dishName": 42,
            "macros": "unknown",
            "ingredients": "rice",
            "allergens": ["우유", 7],
            "detections": [{"label": "계란"}, {"score": 0.9}, "noise"],
            "userAnalysis": "pending"
        }))
        .unwrap();

        assert_eq!(analysis.dish_name, None);
        assert_eq!(analysis.macros, Macros::default());
        assert!(analysis.ingredients.is_empty());
        assert_eq!(analysis.allergens, vec!["우유"]);
        assert_eq!(analysis.detections.len(), 1);
        assert_eq!(analysis.detections[0].label, "계란");
        assert!(analysis.user_analysis.is_none());
    }

    #[test]
    fn test_resolve_coerces_numeric_strings_and_defaults() {
        let analysis: FoodAnalysis = serde_json::from_value(json!({
            "dishName": "비빔밥",
            "macros": {"calories": "650", "protein_g": 18, "fat_g": null, "sodium_mg": "n/a"}
        }))
        .unwrap();

        let macros = analysis.macros.resolve();
        assert!((macros.calories - 650.0).abs() < f64::EPSILON);
        assert!((macros.protein_g - 18.0).abs() < f64::EPSILON);
        assert!(macros.fat_g.abs() < f64::EPSILON);
        assert!(macros.carbs_g.abs() < f64::EPSILON);
        assert_eq!(macros.sodium_mg, None);
    }

    #[test]
    fn test_unknown_keys_round_trip_through_extra() {
        let input = json!({"dishName": "김밥", "imageUrl": "https://cdn/x.jpg"});
        let analysis: FoodAnalysis = serde_json::from_value(input).unwrap();
        let output = serde_json::to_value(&analysis).unwrap();
        assert_eq!(output["imageUrl"], "https://cdn/x.jpg");
        assert_eq!(output["dishName"], "김밥");
    }
}
