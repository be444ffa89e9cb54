// ABOUTME: Weekly and monthly workout summaries built on the period aggregator
// ABOUTME: Reports workout count, total minutes, and a per-type breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

use crate::calendar::WindowDays;
use crate::period::PeriodAggregator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stride_core::constants::windows::{MONTHLY_SUMMARY_DAYS, WEEKLY_SUMMARY_DAYS};
use stride_core::errors::AppResult;
use stride_core::models::WorkoutEvent;

/// Workout activity within a trailing window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Window length in days
    pub window_days: u32,
    /// Workouts dated within the window
    pub workout_count: usize,
    /// Sum of workout durations in minutes
    pub total_minutes: u64,
    /// Workout count per workout type
    pub workouts_by_type: BTreeMap<String, usize>,
}

impl ActivitySummary {
    /// Summary of the 7 days ending at `reference`
    ///
    /// # Errors
    ///
    /// Never fails for the built-in window; kept fallible to share the window contract
    pub fn weekly(workouts: &[WorkoutEvent], reference: NaiveDate) -> AppResult<Self> {
        Self::for_window(workouts, reference, WEEKLY_SUMMARY_DAYS)
    }

    /// Summary of the 30 days ending at `reference`
    ///
    /// # Errors
    ///
    /// Never fails for the built-in window; kept fallible to share the window contract
    pub fn monthly(workouts: &[WorkoutEvent], reference: NaiveDate) -> AppResult<Self> {
        Self::for_window(workouts, reference, MONTHLY_SUMMARY_DAYS)
    }

    /// Summary of an arbitrary trailing window
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `window_days <= 0`
    pub fn for_window(
        workouts: &[WorkoutEvent],
        reference: NaiveDate,
        window_days: i64,
    ) -> AppResult<Self> {
        let window = WindowDays::new(window_days)?;

        let mut workout_count = 0;
        let mut total_minutes = 0_u64;
        let mut workouts_by_type: BTreeMap<String, usize> = BTreeMap::new();

        for workout in PeriodAggregator::filter_within(workouts, reference, window) {
            workout_count += 1;
            total_minutes += u64::from(workout.duration_minutes);
            *workouts_by_type
                .entry(workout.workout_type.clone())
                .or_insert(0) += 1;
        }

        Ok(Self {
            window_days: window.get(),
            workout_count,
            total_minutes,
            workouts_by_type,
        })
    }
}
