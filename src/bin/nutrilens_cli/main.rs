// ABOUTME: NutriLens CLI - run the food scoring engine over JSON files
// ABOUTME: Enriches analyses, reports scores, checks allergens, and prints the allergen catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens
//!
//! Usage:
//! ```bash
//! # Enrich an analysis for a guest
//! nutrilens-cli analyze --analysis analysis.json
//!
//! # Enrich for a user and embed the result back into the analysis
//! nutrilens-cli analyze --analysis analysis.json --profile profile.json --embed
//!
//! # Read the analysis from stdin
//! cat analysis.json | nutrilens-cli score --analysis -
//!
//! # Check allergens
//! nutrilens-cli allergens --analysis analysis.json --allergen 우유 --allergen "난류(계란)"
//!
//! # Print the allergen picker catalog
//! nutrilens-cli catalog
//! ```
//!
//! Results go to stdout as JSON. Logs and errors go to stderr; errors exit
//! with a non-zero status derived from their error code.

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutrilens::errors::AppResult;
use nutrilens::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use helpers::display::print_error;

#[derive(Parser)]
#[command(
    name = "nutrilens-cli",
    version,
    about = "NutriLens food scoring CLI",
    long_about = "Run the NutriLens scoring engine over food analysis and user profile JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Enrich an analysis into a complete personalized annotation
    Analyze {
        /// Food analysis JSON file, or `-` for stdin
        #[arg(long)]
        analysis: String,

        /// User profile JSON file (omit for a guest)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print the whole analysis with `userAnalysis` replaced
        #[arg(long)]
        embed: bool,
    },

    /// Show the score, grade and badge already attached to an analysis
    Score {
        /// Food analysis JSON file, or `-` for stdin
        #[arg(long)]
        analysis: String,
    },

    /// Check user allergens against an analysis
    Allergens {
        /// Food analysis JSON file, or `-` for stdin
        #[arg(long)]
        analysis: String,

        /// Allergen term as the user entered it (repeatable)
        #[arg(long = "allergen", required = true)]
        allergens: Vec<String>,
    },

    /// Print the allergen picker catalog
    Catalog,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            let status = u8::try_from(e.code.exit_code()).unwrap_or(1);
            ExitCode::from(status)
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let compact = cli.compact;

    match cli.command {
        Command::Analyze {
            analysis,
            profile,
            embed,
        } => {
            debug!(%analysis, ?profile, embed, "Running analyze");
            commands::analyze::run(&analysis, profile.as_deref(), embed, compact)
        }
        Command::Score { analysis } => commands::score::run(&analysis, compact),
        Command::Allergens {
            analysis,
            allergens,
        } => commands::allergens::run(&analysis, &allergens, compact),
        Command::Catalog => commands::catalog::run(compact),
    }
}
