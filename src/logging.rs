// ABOUTME: Logging configuration and tracing subscriber setup for the NutriLens binaries
// ABOUTME: Env-driven level and format selection, output written to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Structured logging setup
//!
//! Logs always go to stderr. The CLI prints JSON results on stdout and
//! those must stay parseable regardless of the log level.

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Crates whose events the default filter targets
const APP_TARGETS: [&str; 3] = ["nutrilens", "nutrilens_core", "nutrilens_intelligence"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for our crates (trace, debug, info, warn, error)
    pub level: String,
    /// Raw `RUST_LOG` directives, used as the base filter when set
    pub directives: Option<String>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Environment (development, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output, the CLI default
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to compact
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            directives: None,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let directives = env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let level = directives
            .as_deref()
            .and_then(plain_level)
            .unwrap_or_else(|| "warn".into());

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |v| LogFormat::from_str_lossy(&v));

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            directives,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            environment,
        }
    }

    /// Override the level, dropping any `RUST_LOG` directives
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self.directives = None;
        self
    }

    /// Build the filter
    ///
    /// Per-target `RUST_LOG` directives are used untouched. Otherwise the
    /// base level applies everywhere and our crates get the configured level.
    fn env_filter(&self) -> EnvFilter {
        let base = self.directives.as_deref().unwrap_or(&self.level);
        let mut filter = EnvFilter::new(base);
        if base.contains('=') {
            return filter;
        }

        for target in APP_TARGETS {
            filter = filter.add_directive(
                format!("{target}={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            );
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()
            }
        };
        if let Err(e) = installed {
            return Err(anyhow!("Failed to initialize logging: {e}"));
        }

        debug!(
            log.level = %self.level,
            log.format = ?self.format,
            environment = %self.environment,
            version = env!("CARGO_PKG_VERSION"),
            "Logging initialized"
        );
        Ok(())
    }
}

/// The level name when `directive` is a bare level such as `info`
fn plain_level(directive: &str) -> Option<String> {
    directive
        .trim()
        .parse::<LevelFilter>()
        .ok()
        .as_ref()
        .map(ToString::to_string)
}
