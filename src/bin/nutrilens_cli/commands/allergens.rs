// ABOUTME: Allergens command for nutrilens-cli
// ABOUTME: Reports which user allergens hit an analysis and the needles each term expands to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

use nutrilens::allergen::{
    expand_to_needles, extract_source_tokens, synonym_groups_for, AllergenGroup,
};
use nutrilens::compute_hits;
use nutrilens::errors::{AppError, AppResult};
use nutrilens::models::FoodAnalysis;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::helpers::display::print_json;
use crate::helpers::input::read_json;

#[derive(Debug, Serialize)]
struct TermReport {
    term: String,
    hit: bool,
    groups: BTreeSet<AllergenGroup>,
    needles: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AllergenReport {
    hits: Vec<String>,
    sources: Vec<String>,
    terms: Vec<TermReport>,
}

/// Print allergen hits with per-term diagnostics
pub fn run(analysis: &str, allergens: &[String], compact: bool) -> AppResult<()> {
    if allergens.iter().all(|a| a.trim().is_empty()) {
        return Err(AppError::missing_field("allergen"));
    }

    let food: FoodAnalysis = read_json(analysis)?;
    let hits = compute_hits(allergens, &food);

    let terms = allergens
        .iter()
        .map(|term| TermReport {
            term: term.clone(),
            hit: hits.contains(term),
            groups: synonym_groups_for(term),
            needles: expand_to_needles(term),
        })
        .collect();

    let report = AllergenReport {
        hits,
        sources: extract_source_tokens(&food),
        terms,
    };
    print_json(&report, compact)
}
