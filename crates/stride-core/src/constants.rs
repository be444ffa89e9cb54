// ABOUTME: Default policy values for streaks, trend windows, and summaries
// ABOUTME: Callers override these through configuration rather than editing engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

/// Streak qualification defaults
pub mod streak {
    /// Workouts a week needs to count toward the streak
    pub const DEFAULT_MIN_WORKOUTS_PER_WEEK: u32 = 3;
}

/// Rolling window sizes in days
pub mod windows {
    /// Body weight trend window
    pub const WEIGHT_DAYS: i64 = 30;
    /// Body fat trend window
    pub const BODY_FAT_DAYS: i64 = 30;
    /// Resting heart rate trend window
    pub const RESTING_HEART_RATE_DAYS: i64 = 7;
    /// Sleep duration trend window
    pub const SLEEP_DURATION_DAYS: i64 = 7;
    /// Window for metric kinds without a dedicated setting
    pub const DEFAULT_DAYS: i64 = 7;
    /// Weekly summary window
    pub const WEEKLY_SUMMARY_DAYS: i64 = 7;
    /// Monthly summary window
    pub const MONTHLY_SUMMARY_DAYS: i64 = 30;
}

/// Calendar facts
pub mod time_constants {
    /// Days in a Monday-anchored week
    pub const DAYS_PER_WEEK: i64 = 7;
}
