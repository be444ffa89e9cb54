// ABOUTME: Weekly consistency streak computed from logged workouts
// ABOUTME: Walks backward from the current week until the first non-qualifying week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Streak engine.
//!
//! Workouts are bucketed by the Monday of their week. Starting at the week
//! containing "today" and walking backward, each week qualifies when its count
//! reaches the policy threshold. The current week is evaluated with whatever
//! workouts exist so far; it gets no grace period, so a streak can read 0
//! mid-week. The walk never crosses a gap and never goes past the earliest week
//! that has any data.

use crate::calendar::Week;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stride_core::constants::streak::DEFAULT_MIN_WORKOUTS_PER_WEEK;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::WorkoutEvent;
use tracing::debug;

/// Qualification rule for a streak week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakPolicy {
    /// Workouts a week needs to qualify (inclusive)
    pub min_workouts_per_week: u32,
}

impl Default for StreakPolicy {
    fn default() -> Self {
        Self {
            min_workouts_per_week: DEFAULT_MIN_WORKOUTS_PER_WEEK,
        }
    }
}

impl StreakPolicy {
    /// Create a validated policy
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the threshold is zero
    pub fn new(min_workouts_per_week: u32) -> AppResult<Self> {
        let policy = Self {
            min_workouts_per_week,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Reject a non-positive threshold
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the threshold is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.min_workouts_per_week == 0 {
            return Err(AppError::value_out_of_range(
                "min_workouts_per_week must be at least 1",
            ));
        }
        Ok(())
    }

    /// Whether a week with `count` workouts qualifies
    #[must_use]
    pub const fn qualifies(&self, count: u32) -> bool {
        count >= self.min_workouts_per_week
    }
}

/// Current streak state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    /// Consecutive qualifying weeks ending at the current week
    pub week_count: u32,
    /// Workouts logged so far in the week containing the reference date
    pub current_week_workouts: u32,
}

/// Bucket workouts by the Monday of their week
///
/// # Errors
///
/// Returns `ValueOutOfRange` when a workout's week is not representable
pub fn weekly_workout_counts(
    workouts: &[WorkoutEvent],
) -> AppResult<BTreeMap<NaiveDate, u32>> {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for workout in workouts {
        *counts
            .entry(Week::containing(workout.date)?.start())
            .or_insert(0) += 1;
    }
    Ok(counts)
}

/// Streak calculator bound to a qualification policy
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakCalculator {
    policy: StreakPolicy,
}

impl StreakCalculator {
    /// Create a calculator with the given policy
    #[must_use]
    pub const fn new(policy: StreakPolicy) -> Self {
        Self { policy }
    }

    /// Policy this calculator applies
    #[must_use]
    pub const fn policy(&self) -> StreakPolicy {
        self.policy
    }

    /// Count consecutive qualifying weeks ending at the week containing `today`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a zero threshold or an unrepresentable
    /// week, and `InvalidInput` when a workout is dated after `today`
    pub fn current_streak(
        &self,
        workouts: &[WorkoutEvent],
        today: NaiveDate,
    ) -> AppResult<StreakResult> {
        self.policy.validate()?;
        Self::ensure_chronological(workouts, today)?;

        let counts = weekly_workout_counts(workouts)?;
        let current = Week::containing(today)?;
        let current_week_workouts = counts.get(&current.start()).copied().unwrap_or(0);

        let Some(&earliest) = counts.keys().next() else {
            debug!(%today, "No workouts recorded, streak is 0");
            return Ok(StreakResult::default());
        };

        let mut week_count = 0;
        let mut week = current;
        while week.start() >= earliest {
            let count = counts.get(&week.start()).copied().unwrap_or(0);
            if !self.policy.qualifies(count) {
                break;
            }
            week_count += 1;
            match week.previous() {
                Some(previous) => week = previous,
                None => break,
            }
        }

        debug!(
            %today,
            week_count,
            current_week_workouts,
            min_workouts_per_week = self.policy.min_workouts_per_week,
            "Computed workout streak"
        );

        Ok(StreakResult {
            week_count,
            current_week_workouts,
        })
    }

    /// Longest run of consecutive qualifying weeks anywhere in the history
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a zero threshold or an unrepresentable week
    pub fn longest_streak(&self, workouts: &[WorkoutEvent]) -> AppResult<u32> {
        self.policy.validate()?;

        let mut longest = 0;
        let mut run = 0;
        let mut last_qualifying: Option<Week> = None;

        for (&start, &count) in &weekly_workout_counts(workouts)? {
            let week = Week::containing(start)?;
            if !self.policy.qualifies(count) {
                last_qualifying = None;
                continue;
            }
            run = match last_qualifying {
                Some(prev) if prev.next() == Some(week) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            last_qualifying = Some(week);
        }

        Ok(longest)
    }

    fn ensure_chronological(workouts: &[WorkoutEvent], today: NaiveDate) -> AppResult<()> {
        match workouts.iter().find(|workout| workout.date > today) {
            Some(workout) => Err(AppError::invalid_input(format!(
                "Workout dated {} is after the reference date {today}",
                workout.date
            ))),
            None => Ok(()),
        }
    }
}
