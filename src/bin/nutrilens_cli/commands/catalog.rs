// ABOUTME: Catalog command for nutrilens-cli
// ABOUTME: Prints the allergen picker catalog with resolved synonym groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use nutrilens::allergen::catalog;
use nutrilens::errors::AppResult;

use crate::helpers::display::print_json;

/// Print the picker catalog
pub fn run(compact: bool) -> AppResult<()> {
    print_json(&catalog(), compact)
}
