// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
// ABOUTME: Re-exports helper modules for nutrilens-cli
// ABOUTME: Provides access to JSON input loading and output formatting utilities

pub mod display;
pub mod input;
