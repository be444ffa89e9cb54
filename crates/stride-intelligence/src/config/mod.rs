// ABOUTME: Configuration module for stride-intelligence
// ABOUTME: Re-exports signal policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

/// Configuration error types
pub mod error;

/// Streak threshold, trend windows, and summary windows
pub mod signals;

pub use error::ConfigError;
pub use signals::{SignalsConfig, StreakConfig, SummaryConfig, TrendWindowConfig};
