// ABOUTME: Trailing-window counts and sums over any date-stamped record
// ABOUTME: Shared filter predicate for weekly/monthly summaries and goal progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

use crate::calendar::WindowDays;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::errors::AppResult;
use stride_core::models::Record;

/// Number of records in a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCount {
    /// Records dated within the window
    pub count: usize,
    /// Window length (always > 0)
    pub window_days: u32,
}

/// Sum of a numeric field over a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSum {
    /// Sum of the field across included records
    pub total: f64,
    /// Records dated within the window
    pub count: usize,
    /// Window length (always > 0)
    pub window_days: u32,
}

/// Filter + reduce over a trailing day window
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Count records dated within `window_days` ending at `reference`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `window_days <= 0`
    pub fn count_within<R: Record>(
        records: &[R],
        reference: NaiveDate,
        window_days: i64,
    ) -> AppResult<PeriodCount> {
        let window = WindowDays::new(window_days)?;
        Ok(PeriodCount {
            count: Self::filter_within(records, reference, window).count(),
            window_days: window.get(),
        })
    }

    /// Sum `field` over records dated within `window_days` ending at `reference`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `window_days <= 0`
    pub fn sum_within<R, F>(
        records: &[R],
        reference: NaiveDate,
        window_days: i64,
        field: F,
    ) -> AppResult<PeriodSum>
    where
        R: Record,
        F: Fn(&R) -> f64,
    {
        let window = WindowDays::new(window_days)?;
        let (total, count) = Self::filter_within(records, reference, window)
            .fold((0.0, 0), |(total, count), record| {
                (total + field(record), count + 1)
            });

        Ok(PeriodSum {
            total,
            count,
            window_days: window.get(),
        })
    }

    /// Records dated within `window` ending at `reference`
    pub fn filter_within<'a, R: Record>(
        records: &'a [R],
        reference: NaiveDate,
        window: WindowDays,
    ) -> impl Iterator<Item = &'a R> + 'a {
        records
            .iter()
            .filter(move |record| window.contains(record.date(), reference))
    }
}
