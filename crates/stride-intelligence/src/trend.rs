// ABOUTME: Rolling-window averages for body metrics and physiological samples
// ABOUTME: Tolerates missing days and reports "no data" distinctly from zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Trend engine.
//!
//! Samples are filtered to one `MetricKind` and to the trailing window ending at
//! the reference date, then averaged. Multiple samples on the same date are not
//! collapsed: each one contributes to the mean. The caller is trusted to supply
//! at most one sample per date per kind; uniqueness is not validated, and input
//! order does not matter.

use crate::calendar::WindowDays;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{MetricKind, MetricSample};
use tracing::debug;

/// Average over a rolling window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    /// Arithmetic mean of the included samples, absent when none were included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Number of samples included in the window
    pub sample_count: usize,
}

impl TrendResult {
    /// Whether any sample fell in the window
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.sample_count > 0
    }
}

/// Current window compared against the window immediately before it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendComparison {
    /// Window ending at the reference date
    pub current: TrendResult,
    /// Equal-length window ending the day before `current` starts
    pub previous: TrendResult,
    /// `current - previous`, absent unless both windows have data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

/// Rolling-window metric analysis
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Average the `kind` samples dated within `window_days` ending at `reference`
    ///
    /// Samples of other kinds are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `window_days <= 0` and `InvalidInput` when
    /// an included sample is not a finite number
    pub fn rolling_average(
        samples: &[MetricSample],
        kind: MetricKind,
        reference: NaiveDate,
        window_days: i64,
    ) -> AppResult<TrendResult> {
        let window = WindowDays::new(window_days)?;
        let result = Self::average_in_window(samples, kind, reference, window)?;

        debug!(
            kind = kind.as_str(),
            %reference,
            window_days = window.get(),
            sample_count = result.sample_count,
            average = ?result.average,
            "Computed rolling average"
        );

        Ok(result)
    }

    /// Compare the window ending at `reference` with the preceding window
    ///
    /// # Errors
    ///
    /// Same conditions as [`TrendAnalyzer::rolling_average`], plus
    /// `ValueOutOfRange` when the preceding window ends before the earliest
    /// representable date
    pub fn trend_change(
        samples: &[MetricSample],
        kind: MetricKind,
        reference: NaiveDate,
        window_days: i64,
    ) -> AppResult<TrendComparison> {
        let window = WindowDays::new(window_days)?;
        let current = Self::average_in_window(samples, kind, reference, window)?;
        let previous = Self::average_in_window(
            samples,
            kind,
            window.preceding_reference(reference)?,
            window,
        )?;

        let delta = match (current.average, previous.average) {
            (Some(now), Some(before)) => Some(now - before),
            _ => None,
        };

        Ok(TrendComparison {
            current,
            previous,
            delta,
        })
    }

    fn average_in_window(
        samples: &[MetricSample],
        kind: MetricKind,
        reference: NaiveDate,
        window: WindowDays,
    ) -> AppResult<TrendResult> {
        let mut sum = 0.0;
        let mut sample_count = 0_usize;

        for sample in samples
            .iter()
            .filter(|s| s.kind == kind && window.contains(s.date, reference))
        {
            if !sample.value.is_finite() {
                return Err(AppError::invalid_input(format!(
                    "{kind} sample on {} has non-finite value {}",
                    sample.date, sample.value
                )));
            }
            sum += sample.value;
            sample_count += 1;
        }

        let average = (sample_count > 0).then(|| sum / sample_count as f64);
        Ok(TrendResult {
            average,
            sample_count,
        })
    }
}
