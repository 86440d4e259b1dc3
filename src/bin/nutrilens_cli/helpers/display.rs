// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
// ABOUTME: Output formatting helpers for nutrilens-cli
// ABOUTME: JSON results on stdout and JSON error responses on stderr

use nutrilens::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print a result as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> AppResult<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print an error as a JSON error response on stderr
pub fn print_error(error: &AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{error}"),
    }
}
