// ABOUTME: Workout event record as supplied by the persistence layer
// ABOUTME: Existence on a date is what the streak engine counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

use super::{deserialize_flexible_date, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEvent {
    /// Calendar date of the workout
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Duration in whole minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Free-form workout type ("run", "strength", ...)
    #[serde(rename = "type", default)]
    pub workout_type: String,
    /// Where the workout came from ("manual", "strava", ...)
    #[serde(default)]
    pub source: String,
}

impl WorkoutEvent {
    /// Create a workout event
    #[must_use]
    pub fn new(
        date: NaiveDate,
        duration_minutes: u32,
        workout_type: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            date,
            duration_minutes,
            workout_type: workout_type.into(),
            source: source.into(),
        }
    }
}

impl Record for WorkoutEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
