// ABOUTME: Signal policy configuration loaded from the environment
// ABOUTME: Streak threshold, per-kind trend windows, and summary windows with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Signals Configuration
//!
//! Policy values the engines take as explicit parameters. Defaults match the
//! product rules (3 workouts per week, 30-day body composition windows, 7-day
//! recovery windows); each can be overridden through `STRIDE_*` variables.

use super::error::ConfigError;
use crate::streak::StreakPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use stride_core::constants::streak::DEFAULT_MIN_WORKOUTS_PER_WEEK;
use stride_core::constants::windows;
use stride_core::models::MetricKind;

/// Complete signal policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalsConfig {
    /// Streak qualification
    pub streak: StreakConfig,
    /// Rolling window per metric kind
    pub trend_windows: TrendWindowConfig,
    /// Activity summary windows
    pub summary: SummaryConfig,
}

/// Streak qualification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Workouts a week needs to qualify
    pub min_workouts_per_week: u32,
}

/// Rolling window sizes in days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWindowConfig {
    /// Body weight window
    pub weight_days: i64,
    /// Body fat window
    pub body_fat_days: i64,
    /// Resting heart rate window
    pub resting_heart_rate_days: i64,
    /// Sleep duration window
    pub sleep_duration_days: i64,
    /// Window for kinds without a dedicated setting
    pub default_days: i64,
}

/// Activity summary windows in days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Weekly summary window
    pub weekly_days: i64,
    /// Monthly summary window
    pub monthly_days: i64,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            min_workouts_per_week: DEFAULT_MIN_WORKOUTS_PER_WEEK,
        }
    }
}

impl Default for TrendWindowConfig {
    fn default() -> Self {
        Self {
            weight_days: windows::WEIGHT_DAYS,
            body_fat_days: windows::BODY_FAT_DAYS,
            resting_heart_rate_days: windows::RESTING_HEART_RATE_DAYS,
            sleep_duration_days: windows::SLEEP_DURATION_DAYS,
            default_days: windows::DEFAULT_DAYS,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            weekly_days: windows::WEEKLY_SUMMARY_DAYS,
            monthly_days: windows::MONTHLY_SUMMARY_DAYS,
        }
    }
}

impl StreakConfig {
    /// Streak policy described by this configuration
    #[must_use]
    pub const fn policy(&self) -> StreakPolicy {
        StreakPolicy {
            min_workouts_per_week: self.min_workouts_per_week,
        }
    }
}

impl TrendWindowConfig {
    /// Window length to use for `kind`
    #[must_use]
    pub const fn window_for(&self, kind: MetricKind) -> i64 {
        match kind {
            MetricKind::Weight => self.weight_days,
            MetricKind::BodyFat => self.body_fat_days,
            MetricKind::RestingHeartRate => self.resting_heart_rate_days,
            MetricKind::SleepDuration => self.sleep_duration_days,
            MetricKind::Hrv | MetricKind::Steps => self.default_days,
        }
    }
}

impl SignalsConfig {
    /// Load configuration from environment, falling back to defaults for unset variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unparsable or not positive
    pub fn from_env() -> Result<Self, ConfigError> {
        let min_workouts = env_positive(
            "STRIDE_MIN_WORKOUTS_PER_WEEK",
            i64::from(DEFAULT_MIN_WORKOUTS_PER_WEEK),
        )?;

        let config = Self {
            streak: StreakConfig {
                min_workouts_per_week: u32::try_from(min_workouts)
                    .map_err(|e| ConfigError::Parse(format!("STRIDE_MIN_WORKOUTS_PER_WEEK: {e}")))?,
            },
            trend_windows: TrendWindowConfig {
                weight_days: env_positive("STRIDE_WEIGHT_WINDOW_DAYS", windows::WEIGHT_DAYS)?,
                body_fat_days: env_positive(
                    "STRIDE_BODY_FAT_WINDOW_DAYS",
                    windows::BODY_FAT_DAYS,
                )?,
                resting_heart_rate_days: env_positive(
                    "STRIDE_RESTING_HR_WINDOW_DAYS",
                    windows::RESTING_HEART_RATE_DAYS,
                )?,
                sleep_duration_days: env_positive(
                    "STRIDE_SLEEP_WINDOW_DAYS",
                    windows::SLEEP_DURATION_DAYS,
                )?,
                default_days: env_positive("STRIDE_DEFAULT_WINDOW_DAYS", windows::DEFAULT_DAYS)?,
            },
            summary: SummaryConfig {
                weekly_days: env_positive(
                    "STRIDE_WEEKLY_SUMMARY_DAYS",
                    windows::WEEKLY_SUMMARY_DAYS,
                )?,
                monthly_days: env_positive(
                    "STRIDE_MONTHLY_SUMMARY_DAYS",
                    windows::MONTHLY_SUMMARY_DAYS,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check every threshold and window is positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` naming the first offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streak.min_workouts_per_week == 0 {
            return Err(ConfigError::InvalidRange(
                "streak.min_workouts_per_week must be at least 1",
            ));
        }

        let windows = [
            (self.trend_windows.weight_days, "trend_windows.weight_days"),
            (self.trend_windows.body_fat_days, "trend_windows.body_fat_days"),
            (
                self.trend_windows.resting_heart_rate_days,
                "trend_windows.resting_heart_rate_days",
            ),
            (
                self.trend_windows.sleep_duration_days,
                "trend_windows.sleep_duration_days",
            ),
            (self.trend_windows.default_days, "trend_windows.default_days"),
            (self.summary.weekly_days, "summary.weekly_days"),
            (self.summary.monthly_days, "summary.monthly_days"),
        ];

        match windows.iter().find(|&&(days, _)| days <= 0) {
            Some(&(_, name)) => Err(ConfigError::InvalidRange(name)),
            None => Ok(()),
        }
    }
}

/// Read a positive integer from the environment, or return `default` when unset
fn env_positive(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    let raw = match env::var(key) {
        Ok(raw) => raw,
        Err(env::VarError::NotPresent) => return Ok(default),
        Err(e) => return Err(ConfigError::EnvVar(e)),
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::Parse(format!("{key}='{raw}': {e}")))?;

    if value <= 0 {
        return Err(ConfigError::ValueOutOfRange(key));
    }
    Ok(value)
}
