// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
// ABOUTME: JSON input loading for nutrilens-cli
// ABOUTME: Reads analysis and profile documents from files or stdin

use nutrilens::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Source name that selects stdin
const STDIN: &str = "-";

/// Read and deserialize a JSON document from a path or `-`
pub fn read_json<T: DeserializeOwned>(source: &str) -> AppResult<T> {
    let text = if source == STDIN {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| with_context(AppError::from(e), "stdin"))?;
        buf
    } else {
        fs::read_to_string(Path::new(source))
            .map_err(|e| with_context(AppError::from(e), source))?
    };

    if text.trim().is_empty() {
        let message = format!("{source}: document is empty");
        return Err(AppError::invalid_input(message));
    }
    debug!(source, bytes = text.len(), "Read JSON input");

    serde_json::from_str(&text).map_err(|e| with_context(AppError::from(e), source))
}

/// Read an optional document given as a path
pub fn read_optional_json<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<Option<T>> {
    path.map(|p| read_json(&p.to_string_lossy())).transpose()
}

fn with_context(mut error: AppError, source: &str) -> AppError {
    error.message = format!("{source}: {}", error.message);
    error
}
