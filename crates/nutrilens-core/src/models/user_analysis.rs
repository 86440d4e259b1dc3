// ABOUTME: Personalized annotation models attached to a food analysis
// ABOUTME: Grade, BadgeVariant, GuidanceField, the enriched UserAnalysis and its partial form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::constants::scoring;

/// Five-level appropriateness grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Excellent fit
    VeryGood,
    /// Good fit
    Good,
    /// Acceptable
    Neutral,
    /// Poor fit
    Bad,
    /// Avoid
    VeryBad,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 5] = [
        Self::VeryGood,
        Self::Good,
        Self::Neutral,
        Self::Bad,
        Self::VeryBad,
    ];

    /// Parse a grade string as sent by the backend
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "very_good" => Some(Self::VeryGood),
            "good" => Some(Self::Good),
            "neutral" => Some(Self::Neutral),
            "bad" => Some(Self::Bad),
            "very_bad" => Some(Self::VeryBad),
            _ => None,
        }
    }

    /// Wire name of the grade
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryGood => "very_good",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Bad => "bad",
            Self::VeryBad => "very_bad",
        }
    }

    /// Canonical `score100` for this grade
    #[must_use]
    pub const fn score100(self) -> u8 {
        match self {
            Self::VeryGood => scoring::VERY_GOOD_SCORE,
            Self::Good => scoring::GOOD_SCORE,
            Self::Neutral => scoring::NEUTRAL_SCORE,
            Self::Bad => scoring::BAD_SCORE,
            Self::VeryBad => scoring::VERY_BAD_SCORE,
        }
    }

    /// Grade for a `score100`, using the fixed thresholds 85/70/55/40
    #[must_use]
    pub const fn from_score100(score: u8) -> Self {
        if score >= scoring::VERY_GOOD_MIN {
            Self::VeryGood
        } else if score >= scoring::GOOD_MIN {
            Self::Good
        } else if score >= scoring::NEUTRAL_MIN {
            Self::Neutral
        } else if score >= scoring::BAD_MIN {
            Self::Bad
        } else {
            Self::VeryBad
        }
    }

    /// Korean label shown on the result card
    #[must_use]
    pub const fn label_ko(self) -> &'static str {
        match self {
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Neutral => "보통",
            Self::Bad => "나쁨",
            Self::VeryBad => "매우 나쁨",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color tier for displaying a score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Green badge
    Success,
    /// Amber badge
    Warning,
    /// Red badge
    Danger,
    /// Neutral badge when there is no score
    Default,
}

/// The guidance lists of a [`UserAnalysis`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidanceField {
    /// Positive aspects
    Pros,
    /// Negative aspects
    Cons,
    /// Fit with the body goal
    GoalFit,
    /// Fit with the health diet
    DietFit,
    /// General health impact
    HealthImpact,
    /// Why the score is what it is
    Reasons,
    /// Allergen warnings
    Warnings,
    /// Suggested substitutions
    Alternatives,
    /// Photography tips
    Tips,
}

impl GuidanceField {
    /// Every guidance field in display order
    pub const ALL: [Self; 9] = [
        Self::Pros,
        Self::Cons,
        Self::GoalFit,
        Self::DietFit,
        Self::HealthImpact,
        Self::Reasons,
        Self::Warnings,
        Self::Alternatives,
        Self::Tips,
    ];

    /// JSON key of the field
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pros => "pros",
            Self::Cons => "cons",
            Self::GoalFit => "goalFit",
            Self::DietFit => "dietFit",
            Self::HealthImpact => "healthImpact",
            Self::Reasons => "reasons",
            Self::Warnings => "warnings",
            Self::Alternatives => "alternatives",
            Self::Tips => "tips",
        }
    }
}

/// Fully populated annotation, ready for rendering
///
/// Produced by the enrichment engine. `score100` is within `0..=100` and every
/// list holds at least one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalysis {
    /// Grade shown on the result card
    pub grade: Grade,
    /// Score on a 100-point scale
    pub score100: u8,
    /// Positive aspects
    pub pros: Vec<String>,
    /// Negative aspects
    pub cons: Vec<String>,
    /// Fit with the body goal
    pub goal_fit: Vec<String>,
    /// Fit with the health diet
    pub diet_fit: Vec<String>,
    /// General health impact
    pub health_impact: Vec<String>,
    /// Why the score is what it is
    pub reasons: Vec<String>,
    /// Allergen warnings
    pub warnings: Vec<String>,
    /// Suggested substitutions
    pub alternatives: Vec<String>,
    /// Photography tips
    pub tips: Vec<String>,
}

impl UserAnalysis {
    /// Borrow one guidance list
    #[must_use]
    pub fn field(&self, field: GuidanceField) -> &[String] {
        match field {
            GuidanceField::Pros => &self.pros,
            GuidanceField::Cons => &self.cons,
            GuidanceField::GoalFit => &self.goal_fit,
            GuidanceField::DietFit => &self.diet_fit,
            GuidanceField::HealthImpact => &self.health_impact,
            GuidanceField::Reasons => &self.reasons,
            GuidanceField::Warnings => &self.warnings,
            GuidanceField::Alternatives => &self.alternatives,
            GuidanceField::Tips => &self.tips,
        }
    }

    /// Mutably borrow one guidance list
    pub fn field_mut(&mut self, field: GuidanceField) -> &mut Vec<String> {
        match field {
            GuidanceField::Pros => &mut self.pros,
            GuidanceField::Cons => &mut self.cons,
            GuidanceField::GoalFit => &mut self.goal_fit,
            GuidanceField::DietFit => &mut self.diet_fit,
            GuidanceField::HealthImpact => &mut self.health_impact,
            GuidanceField::Reasons => &mut self.reasons,
            GuidanceField::Warnings => &mut self.warnings,
            GuidanceField::Alternatives => &mut self.alternatives,
            GuidanceField::Tips => &mut self.tips,
        }
    }
}

/// Annotation as found on an incoming analysis
///
/// The backend may fill any subset of fields with any JSON type, so every
/// field keeps its raw value; acceptance rules are applied during the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUserAnalysis {
    /// Grade string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Value>,
    /// Score, number or numeric string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score100: Option<Value>,
    /// Positive aspects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pros: Option<Value>,
    /// Negative aspects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cons: Option<Value>,
    /// Fit with the body goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_fit: Option<Value>,
    /// Fit with the health diet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_fit: Option<Value>,
    /// General health impact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_impact: Option<Value>,
    /// Why the score is what it is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Value>,
    /// Allergen warnings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Value>,
    /// Suggested substitutions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Value>,
    /// Photography tips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Value>,
}

impl PartialUserAnalysis {
    /// Raw value of one guidance list
    #[must_use]
    pub const fn field(&self, field: GuidanceField) -> Option<&Value> {
        match field {
            GuidanceField::Pros => self.pros.as_ref(),
            GuidanceField::Cons => self.cons.as_ref(),
            GuidanceField::GoalFit => self.goal_fit.as_ref(),
            GuidanceField::DietFit => self.diet_fit.as_ref(),
            GuidanceField::HealthImpact => self.health_impact.as_ref(),
            GuidanceField::Reasons => self.reasons.as_ref(),
            GuidanceField::Warnings => self.warnings.as_ref(),
            GuidanceField::Alternatives => self.alternatives.as_ref(),
            GuidanceField::Tips => self.tips.as_ref(),
        }
    }

    /// Set one guidance list
    #[must_use]
    pub fn with_field<I, S>(mut self, field: GuidanceField, sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = Value::Array(
            sentences
                .into_iter()
                .map(|s| Value::String(s.into()))
                .collect(),
        );
        let slot = match field {
            GuidanceField::Pros => &mut self.pros,
            GuidanceField::Cons => &mut self.cons,
            GuidanceField::GoalFit => &mut self.goal_fit,
            GuidanceField::DietFit => &mut self.diet_fit,
            GuidanceField::HealthImpact => &mut self.health_impact,
            GuidanceField::Reasons => &mut self.reasons,
            GuidanceField::Warnings => &mut self.warnings,
            GuidanceField::Alternatives => &mut self.alternatives,
            GuidanceField::Tips => &mut self.tips,
        };
        *slot = Some(value);
        self
    }
}

impl From<&UserAnalysis> for PartialUserAnalysis {
    fn from(analysis: &UserAnalysis) -> Self {
        GuidanceField::ALL.into_iter().fold(
            Self {
                grade: Some(Value::String(analysis.grade.as_str().to_owned())),
                score100: Some(Value::from(analysis.score100)),
                ..Self::default()
            },
            |partial, field| partial.with_field(field, analysis.field(field).iter().cloned()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grade_thresholds_at_boundaries() {
        let cases = [
            (100, Grade::VeryGood),
            (90, Grade::VeryGood),
            (85, Grade::VeryGood),
            (84, Grade::Good),
            (70, Grade::Good),
            (69, Grade::Neutral),
            (55, Grade::Neutral),
            (54, Grade::Bad),
            (40, Grade::Bad),
            (39, Grade::VeryBad),
            (0, Grade::VeryBad),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_score100(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_grade_parse_is_case_and_space_tolerant() {
        assert_eq!(Grade::parse(" Very_Good "), Some(Grade::VeryGood));
        assert_eq!(Grade::parse("excellent"), None);
    }

    #[test]
    fn test_canonical_scores_round_trip_to_same_grade() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_score100(grade.score100()), grade);
        }
    }

    #[test]
    fn test_user_analysis_serializes_camel_case() {
        let analysis = UserAnalysis {
            grade: Grade::Good,
            score100: 72,
            pros: vec!["a".into()],
            cons: vec!["b".into()],
            goal_fit: vec!["c".into()],
            diet_fit: vec!["d".into()],
            health_impact: vec!["e".into()],
            reasons: vec!["f".into()],
            warnings: vec!["g".into()],
            alternatives: vec!["h".into()],
            tips: vec!["i".into()],
        };
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["grade"], "good");
        assert_eq!(value["goalFit"], json!(["c"]));
        assert_eq!(value["healthImpact"], json!(["e"]));

        let partial = PartialUserAnalysis::from(&analysis);
        assert_eq!(partial.score100, Some(json!(72)));
        assert_eq!(partial.field(GuidanceField::Tips), Some(&json!(["i"])));
    }
}
