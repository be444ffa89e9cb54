// ABOUTME: Shared fixtures for stride signals integration tests
// ABOUTME: Date parsing, workout and metric sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `stride_signals`

use chrono::{Days, NaiveDate};
use stride_signals::models::{MetricKind, MetricSample, WorkoutEvent};

/// Floating point tolerance for averages
pub const EPSILON: f64 = 1e-9;

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A 45 minute manual run on `s`
pub fn workout(s: &str) -> WorkoutEvent {
    WorkoutEvent::new(date(s), 45, "run", "manual")
}

/// One workout per listed date
pub fn workouts(dates: &[&str]) -> Vec<WorkoutEvent> {
    dates.iter().map(|d| workout(d)).collect()
}

/// `count` workouts on consecutive days starting at `monday`
pub fn week_of_workouts(monday: NaiveDate, count: u64) -> Vec<WorkoutEvent> {
    (0..count)
        .map(|offset| {
            WorkoutEvent::new(
                monday.checked_add_days(Days::new(offset)).unwrap(),
                30,
                "strength",
                "manual",
            )
        })
        .collect()
}

/// Monday `weeks_back` weeks before `monday`
pub fn weeks_before(monday: NaiveDate, weeks_back: u64) -> NaiveDate {
    monday.checked_sub_days(Days::new(7 * weeks_back)).unwrap()
}

/// A metric sample on `s`
pub fn sample(s: &str, value: f64, kind: MetricKind) -> MetricSample {
    MetricSample::new(date(s), value, kind)
}

/// Assert two floats are equal within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
