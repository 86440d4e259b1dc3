// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
// ABOUTME: Re-exports command modules for nutrilens-cli
// ABOUTME: Provides access to the analyze, score, allergens, and catalog commands

pub mod allergens;
pub mod analyze;
pub mod catalog;
pub mod score;
