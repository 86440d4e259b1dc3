// ABOUTME: Analysis configuration for guidance thresholds and default scores
// ABOUTME: Provides defaults, environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Analysis Configuration
//!
//! The macro thresholds that drive guidance sentences, and the scores used
//! when an analysis carries no prior score. Defaults match the values the
//! product ships with; every field can be overridden through `NUTRILENS_*`
//! environment variables.
//!
//! Grade thresholds and the grade/score table are fixed in
//! [`nutrilens_core::constants::scoring`] and are deliberately absent here.

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

use nutrilens_core::constants::scoring::SCORE_MAX;

/// Global configuration singleton
static ANALYSIS_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

/// Macro thresholds that trigger guidance sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceThresholds {
    /// Protein at or above this is a pro (g)
    pub protein_high_g: f64,
    /// Protein above zero but below this is a con (g)
    pub protein_low_g: f64,
    /// Fat at or above this is a con (g)
    pub fat_high_g: f64,
    /// Carbohydrates at or above this are a con (g)
    pub carbs_high_g: f64,
    /// Sodium above this is a con (mg)
    pub sodium_high_mg: f64,
    /// Calories above this trigger the extra diet-goal warning (kcal)
    pub diet_calorie_limit: f64,
    /// Protein below this triggers the extra bulking suggestion (g)
    pub bulking_protein_min_g: f64,
    /// Carbohydrates above this trigger the low-carb elaboration (g)
    pub low_carb_limit_g: f64,
    /// Fat above this triggers the low-fat elaboration (g)
    pub low_fat_limit_g: f64,
}

impl Default for GuidanceThresholds {
    fn default() -> Self {
        Self {
            protein_high_g: 20.0,
            protein_low_g: 15.0,
            fat_high_g: 25.0,
            carbs_high_g: 80.0,
            sodium_high_mg: 800.0,
            diet_calorie_limit: 700.0,
            bulking_protein_min_g: 25.0,
            low_carb_limit_g: 50.0,
            low_fat_limit_g: 15.0,
        }
    }
}

/// Scores used when the analysis has no score of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDefaults {
    /// Score when the estimate carries calories
    pub score_with_data: u8,
    /// Score when the estimate has no calorie data
    pub score_without_data: u8,
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            score_with_data: 70,
            score_without_data: 60,
        }
    }
}

/// Main analysis configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Guidance thresholds
    pub guidance: GuidanceThresholds,
    /// Fallback scores
    pub scoring: ScoringDefaults,
}

impl AnalysisConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first use; falls back to defaults when
    /// the environment holds invalid values.
    pub fn global() -> &'static Self {
        ANALYSIS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analysis config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Analysis configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold is not positive or thresholds contradict each other
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.guidance;
        let all_thresholds = [
            g.protein_high_g,
            g.protein_low_g,
            g.fat_high_g,
            g.carbs_high_g,
            g.sodium_high_mg,
            g.diet_calorie_limit,
            g.bulking_protein_min_g,
            g.low_carb_limit_g,
            g.low_fat_limit_g,
        ];
        if all_thresholds.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Guidance thresholds must be positive finite numbers",
            ));
        }

        if g.protein_low_g > g.protein_high_g {
            return Err(ConfigError::InvalidRange(
                "protein_low_g must be <= protein_high_g",
            ));
        }

        if g.low_carb_limit_g > g.carbs_high_g {
            return Err(ConfigError::InvalidRange(
                "low_carb_limit_g must be <= carbs_high_g",
            ));
        }

        if g.low_fat_limit_g > g.fat_high_g {
            return Err(ConfigError::InvalidRange(
                "low_fat_limit_g must be <= fat_high_g",
            ));
        }

        let s = &self.scoring;
        if s.score_with_data > SCORE_MAX || s.score_without_data > SCORE_MAX {
            return Err(ConfigError::ValueOutOfRange(
                "Default scores must be between 0 and 100",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let g = &mut self.guidance;
        Self::apply_env_var("NUTRILENS_PROTEIN_HIGH_G", &mut g.protein_high_g)?;
        Self::apply_env_var("NUTRILENS_PROTEIN_LOW_G", &mut g.protein_low_g)?;
        Self::apply_env_var("NUTRILENS_FAT_HIGH_G", &mut g.fat_high_g)?;
        Self::apply_env_var("NUTRILENS_CARBS_HIGH_G", &mut g.carbs_high_g)?;
        Self::apply_env_var("NUTRILENS_SODIUM_HIGH_MG", &mut g.sodium_high_mg)?;
        Self::apply_env_var("NUTRILENS_DIET_CALORIE_LIMIT", &mut g.diet_calorie_limit)?;
        Self::apply_env_var(
            "NUTRILENS_BULKING_PROTEIN_MIN_G",
            &mut g.bulking_protein_min_g,
        )?;
        Self::apply_env_var("NUTRILENS_LOW_CARB_LIMIT_G", &mut g.low_carb_limit_g)?;
        Self::apply_env_var("NUTRILENS_LOW_FAT_LIMIT_G", &mut g.low_fat_limit_g)?;

        let s = &mut self.scoring;
        Self::apply_env_var("NUTRILENS_SCORE_WITH_DATA", &mut s.score_with_data)?;
        Self::apply_env_var("NUTRILENS_SCORE_WITHOUT_DATA", &mut s.score_without_data)?;

        Ok(self)
    }
}
