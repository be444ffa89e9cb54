// ABOUTME: Logging configuration and tracing subscriber setup for applications embedding the engines
// ABOUTME: Configures log level and output format (json, pretty, compact) from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Structured logging setup.
//!
//! The engines only emit `tracing` events; installing a subscriber is left to
//! the embedding application, which can call [`LoggingConfig::init`].

use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from `RUST_LOG`, `LOG_FORMAT` and `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var("LOG_FORMAT")
                .map_or(LogFormat::Pretty, |v| LogFormat::from_str_or_default(&v)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Filter built from the configured level
    ///
    /// A bare level also pins the engine targets to it. A directive list is
    /// used as given, so per-target settings the caller wrote are kept.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::new(&self.level);
        let Ok(engine_level) = self.level.trim().parse::<tracing::Level>() else {
            return filter;
        };

        filter
            .add_directive(
                format!("stride_intelligence={engine_level}")
                    .parse()
                    .unwrap_or_else(|_| engine_level.into()),
            )
            .add_directive(
                format!("stride_signals={engine_level}")
                    .parse()
                    .unwrap_or_else(|_| engine_level.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stdout);

                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            log.level = %self.level,
            log.format = ?self.format,
            version = env!("CARGO_PKG_VERSION"),
            "Stride signals logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging from `RUST_LOG`, `LOG_FORMAT` and `LOG_INCLUDE_LOCATION`
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_logging() -> Result<()> {
    LoggingConfig::from_env().init()
}
