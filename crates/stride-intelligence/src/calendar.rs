// ABOUTME: Calendar utilities shared by every signal engine
// ABOUTME: Monday-anchored weeks, signed day counts, and trailing-window membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Calendar utilities.
//!
//! All functions operate on calendar dates only. No time-of-day component is
//! examined, so results do not depend on the caller's time zone.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;
use stride_core::constants::time_constants::DAYS_PER_WEEK;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::parse_calendar_date;

/// Monday (inclusive) of the week containing `date`
///
/// # Errors
///
/// Returns `ValueOutOfRange` when that Monday precedes the earliest
/// representable date
pub fn week_start(date: NaiveDate) -> AppResult<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).ok_or_else(|| {
        AppError::value_out_of_range(format!(
            "Week containing {date} starts before the earliest supported date"
        ))
    })
}

fn days_before(reference: NaiveDate, days: u32) -> AppResult<NaiveDate> {
    reference
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            AppError::value_out_of_range(format!(
                "{days} days before {reference} is outside the supported date range"
            ))
        })
}

/// Signed number of days from `a` to `b`; positive when `b` is after `a`
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// True iff `0 <= days_between(date, reference) < n`
///
/// # Errors
///
/// Returns `ValueOutOfRange` when `n <= 0`
pub fn within_last_n_days(date: NaiveDate, reference: NaiveDate, n: i64) -> AppResult<bool> {
    Ok(WindowDays::new(n)?.contains(date, reference))
}

/// Parse a calendar date from `YYYY-MM-DD` or an ISO 8601 timestamp
///
/// # Errors
///
/// Returns `InvalidFormat` when the input is not a recognizable date
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    parse_calendar_date(input).ok_or_else(|| {
        AppError::invalid_format(format!(
            "Invalid date '{input}': expected 'YYYY-MM-DD' or an ISO 8601 timestamp"
        ))
    })
}

/// Trailing window length in days, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowDays(u32);

impl WindowDays {
    /// Validate a window length
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `days` is not a positive 32-bit count
    pub fn new(days: i64) -> AppResult<Self> {
        if days <= 0 {
            return Err(AppError::value_out_of_range(format!(
                "Window must be a positive number of days, got {days}"
            )));
        }
        u32::try_from(days).map(Self).map_err(|_| {
            AppError::value_out_of_range(format!("Window of {days} days is too large"))
        })
    }

    /// Window length in days
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether `date` falls in the window ending at (and including) `reference`
    #[must_use]
    pub fn contains(self, date: NaiveDate, reference: NaiveDate) -> bool {
        let elapsed = days_between(date, reference);
        (0..i64::from(self.0)).contains(&elapsed)
    }

    /// Inclusive `(first, last)` dates of the window ending at `reference`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the window starts before the earliest
    /// representable date
    pub fn bounds(self, reference: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
        Ok((days_before(reference, self.0 - 1)?, reference))
    }

    /// Reference date of the window immediately preceding this one
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when that date precedes the earliest
    /// representable date
    pub fn preceding_reference(self, reference: NaiveDate) -> AppResult<NaiveDate> {
        days_before(reference, self.0)
    }
}

impl TryFrom<i64> for WindowDays {
    type Error = AppError;

    fn try_from(days: i64) -> AppResult<Self> {
        Self::new(days)
    }
}

impl fmt::Display for WindowDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// A Monday-to-Sunday span identified by its Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Week {
    start: NaiveDate,
    end: NaiveDate,
}

impl Week {
    /// The week containing `date`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the week is not fully representable
    pub fn containing(date: NaiveDate) -> AppResult<Self> {
        let start = week_start(date)?;
        Self::from_start(start).ok_or_else(|| {
            AppError::value_out_of_range(format!(
                "Week containing {date} ends after the latest supported date"
            ))
        })
    }

    fn from_start(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    /// Monday of this week
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Sunday of this week
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// The week before this one, if representable
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.start
            .checked_sub_days(Days::new(DAYS_PER_WEEK.unsigned_abs()))
            .and_then(Self::from_start)
    }

    /// The week after this one, if representable
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.start
            .checked_add_days(Days::new(DAYS_PER_WEEK.unsigned_abs()))
            .and_then(Self::from_start)
    }

    /// Whether `date` falls within Monday..=Sunday of this week
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}
