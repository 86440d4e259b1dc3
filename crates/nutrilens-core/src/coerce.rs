// ABOUTME: Lenient coercion helpers for loosely typed analysis and profile JSON
// ABOUTME: Numeric coercion, string list filtering, and never-failing serde field adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Boundary coercion.
//!
//! Backend payloads arrive with missing fields, `null`s, numbers encoded as
//! strings and occasionally values of the wrong type altogether. Everything in
//! this module turns such input into "absent" instead of an error, so the
//! models in [`crate::models`] always deserialize and the scoring logic never
//! needs to check types again.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a finite number
///
/// Accepts JSON numbers and strings holding a decimal number (surrounding
/// whitespace ignored). Everything else, including `NaN`/`inf` spellings,
/// yields `None`.
#[must_use]
pub fn finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Safe numeric coercion: missing or non-finite values become `0.0`
#[must_use]
pub fn n(value: Option<&Value>) -> f64 {
    value.and_then(finite_number).unwrap_or(0.0)
}

/// Collect the non-empty, trimmed string entries of a JSON array
///
/// Non-array values produce an empty list; non-string entries are dropped.
#[must_use]
pub fn string_entries(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Serde adapter: deserialize `T`, falling back to `T::default()` on any shape mismatch
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON at all.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Serde adapter for free-text lists: keeps only non-empty string entries
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON at all.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_entries(&value))
}

/// Serde adapter for an optional display string: non-strings and blanks become `None`
///
/// # Errors
///
/// Only fails when the underlying input is not valid JSON at all.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned))
}
