// ABOUTME: Goal progress tracking over a trailing window of workouts
// ABOUTME: Supports workout-count and workout-minute targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

use crate::period::PeriodAggregator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::WorkoutEvent;
use tracing::debug;

/// Quantity a goal measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalMetric {
    /// Number of workouts
    WorkoutCount,
    /// Total workout duration in minutes
    WorkoutMinutes,
}

/// A target to reach within a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// What is measured
    pub metric: GoalMetric,
    /// Amount to reach (finite, > 0)
    pub target: f64,
    /// Trailing window the goal applies to
    pub window_days: i64,
}

/// Progress toward a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Amount achieved within the window
    pub current: f64,
    /// Amount to reach
    pub target: f64,
    /// `current / target * 100`, not capped
    pub percent_complete: f64,
    /// Whether `current >= target`
    pub achieved: bool,
}

/// Goal progress calculator
pub struct GoalTracker;

impl GoalTracker {
    /// Evaluate `goal` against workouts in the window ending at `reference`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-positive or non-finite target and
    /// for a non-positive window
    pub fn progress(
        goal: &Goal,
        workouts: &[WorkoutEvent],
        reference: NaiveDate,
    ) -> AppResult<GoalProgress> {
        if !goal.target.is_finite() || goal.target <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "Goal target must be a positive number, got {}",
                goal.target
            )));
        }

        let current = match goal.metric {
            GoalMetric::WorkoutCount => {
                PeriodAggregator::count_within(workouts, reference, goal.window_days)?.count
                    as f64
            }
            GoalMetric::WorkoutMinutes => {
                PeriodAggregator::sum_within(workouts, reference, goal.window_days, |w| {
                    f64::from(w.duration_minutes)
                })?
                .total
            }
        };

        let percent_complete = current / goal.target * 100.0;
        let achieved = current >= goal.target;

        debug!(
            metric = ?goal.metric,
            current,
            target = goal.target,
            achieved,
            "Evaluated goal progress"
        );

        Ok(GoalProgress {
            current,
            target: goal.target,
            percent_complete,
            achieved,
        })
    }
}
