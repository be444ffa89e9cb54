// ABOUTME: Computes every signal for a record snapshot with per-metric failure isolation
// ABOUTME: One failing metric yields a Failed entry instead of aborting the whole dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Dashboard composition.
//!
//! Each metric is computed in its own engine call and captured as a
//! [`SignalOutcome`], so a rejected input on one metric still leaves the rest
//! of the dashboard populated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{MetricKind, MetricSample, WorkoutEvent};
use stride_intelligence::config::SignalsConfig;
use stride_intelligence::{
    ActivitySummary, Goal, GoalProgress, GoalTracker, StreakCalculator, StreakResult,
    TrendAnalyzer, TrendComparison,
};
use tracing::{debug, warn};

/// Result of a single metric computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SignalOutcome<T> {
    /// Metric computed successfully
    Ready {
        /// Computed value
        value: T,
    },
    /// Metric could not be computed from the supplied inputs
    Failed {
        /// Why the engine rejected the input
        error: AppError,
    },
}

impl<T> SignalOutcome<T> {
    /// Capture an engine result, logging failures under `metric`
    #[must_use]
    pub fn capture(metric: &str, result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready { value },
            Err(error) => {
                warn!(metric, code = ?error.code, message = %error.message, "Signal computation failed");
                Self::Failed { error }
            }
        }
    }

    /// Computed value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready { value } => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// Error, if the computation failed
    #[must_use]
    pub const fn error(&self) -> Option<&AppError> {
        match self {
            Self::Ready { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    /// Whether the metric was computed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Immutable view over the caller's records for one computation
#[derive(Debug, Clone, Copy)]
pub struct RecordSnapshot<'a> {
    /// Every workout the caller loaded
    pub workouts: &'a [WorkoutEvent],
    /// Every metric sample the caller loaded, all kinds mixed
    pub metrics: &'a [MetricSample],
}

/// All signals for one reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSignals {
    /// Date every window ends at
    pub reference_date: NaiveDate,
    /// Current weekly streak
    pub streak: SignalOutcome<StreakResult>,
    /// Longest weekly streak in the history
    pub longest_streak: SignalOutcome<u32>,
    /// Rolling trend per metric kind, each with its configured window
    pub trends: BTreeMap<MetricKind, SignalOutcome<TrendComparison>>,
    /// Weekly activity summary
    pub weekly_summary: SignalOutcome<ActivitySummary>,
    /// Monthly activity summary
    pub monthly_summary: SignalOutcome<ActivitySummary>,
    /// Progress for each requested goal, in request order
    pub goals: Vec<SignalOutcome<GoalProgress>>,
}

impl DashboardSignals {
    /// Compute every signal for `snapshot` as of `reference`
    #[must_use]
    pub fn compute(
        snapshot: &RecordSnapshot<'_>,
        goals: &[Goal],
        reference: NaiveDate,
        config: &SignalsConfig,
    ) -> Self {
        let streak_calculator = StreakCalculator::new(config.streak.policy());

        let trends = MetricKind::ALL
            .into_iter()
            .map(|kind| {
                let outcome = SignalOutcome::capture(
                    kind.as_str(),
                    TrendAnalyzer::trend_change(
                        snapshot.metrics,
                        kind,
                        reference,
                        config.trend_windows.window_for(kind),
                    ),
                );
                (kind, outcome)
            })
            .collect();

        let signals = Self {
            reference_date: reference,
            streak: SignalOutcome::capture(
                "streak",
                streak_calculator.current_streak(snapshot.workouts, reference),
            ),
            longest_streak: SignalOutcome::capture(
                "longest_streak",
                streak_calculator.longest_streak(snapshot.workouts),
            ),
            trends,
            weekly_summary: SignalOutcome::capture(
                "weekly_summary",
                ActivitySummary::for_window(
                    snapshot.workouts,
                    reference,
                    config.summary.weekly_days,
                ),
            ),
            monthly_summary: SignalOutcome::capture(
                "monthly_summary",
                ActivitySummary::for_window(
                    snapshot.workouts,
                    reference,
                    config.summary.monthly_days,
                ),
            ),
            goals: goals
                .iter()
                .map(|goal| {
                    SignalOutcome::capture(
                        "goal",
                        GoalTracker::progress(goal, snapshot.workouts, reference),
                    )
                })
                .collect(),
        };

        debug!(
            %reference,
            workouts = snapshot.workouts.len(),
            metrics = snapshot.metrics.len(),
            failures = signals.failure_count(),
            "Computed dashboard signals"
        );

        signals
    }

    /// Number of metrics that failed to compute
    #[must_use]
    pub fn failure_count(&self) -> usize {
        let fixed = [
            self.streak.is_ready(),
            self.longest_streak.is_ready(),
            self.weekly_summary.is_ready(),
            self.monthly_summary.is_ready(),
        ];

        fixed.iter().filter(|ready| !**ready).count()
            + self.trends.values().filter(|o| !o.is_ready()).count()
            + self.goals.iter().filter(|o| !o.is_ready()).count()
    }
}
