// ABOUTME: Errors raised while loading and validating guidance thresholds
// ABOUTME: Covers inverted macro threshold pairs, bad NUTRILENS_* values, and out-of-range scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Configuration errors.
//!
//! The engine never sees these: [`AnalysisConfig::global`](super::AnalysisConfig::global)
//! falls back to defaults. Binaries call [`AnalysisConfig::load`](super::AnalysisConfig::load)
//! and surface them as [`AppError::config`].

use std::env;
use thiserror::Error;

use nutrilens_core::errors::AppError;

/// Errors from [`AnalysisConfig::load`](super::AnalysisConfig::load) and
/// [`AnalysisConfig::validate`](super::AnalysisConfig::validate)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A low/high macro pair is inverted, e.g. `protein_low_g` above
    /// `protein_high_g` or `low_fat_limit_g` above `fat_high_g`
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A `NUTRILENS_*` variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// A `NUTRILENS_*` variable does not parse as the field's type
    /// (a gram/mg threshold or a 0-255 score)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A threshold is not a positive finite number, or a default score exceeds 100
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
