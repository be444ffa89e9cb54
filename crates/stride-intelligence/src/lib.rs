// ABOUTME: Streak, trend, and period aggregation engines over fitness records
// ABOUTME: Pure synchronous algorithms sharing a calendar utility layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Signal metrics derived from an in-memory snapshot of fitness records.
//! Every operation is a pure function of its explicit inputs: no I/O, no shared
//! mutable state, and no retained references to caller data. Each call can be
//! made independently, so a failure computing one metric never affects another.

/// Week boundaries, day arithmetic, and trailing-window predicates
pub mod calendar;

/// Consecutive qualifying-week streaks
pub mod streak;

/// Rolling-window metric averages
pub mod trend;

/// Trailing-window counts and sums over any record type
pub mod period;

/// Weekly and monthly workout summaries
pub mod summary;

/// Goal progress over a trailing window
pub mod goals;

/// Signal policy configuration (thresholds and window sizes)
pub mod config;

pub use calendar::{Week, WindowDays};
pub use goals::{Goal, GoalMetric, GoalProgress, GoalTracker};
pub use period::{PeriodAggregator, PeriodCount, PeriodSum};
pub use streak::{StreakCalculator, StreakPolicy, StreakResult};
pub use summary::ActivitySummary;
pub use trend::{TrendAnalyzer, TrendComparison, TrendResult};
