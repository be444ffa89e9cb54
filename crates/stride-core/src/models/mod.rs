// ABOUTME: Date-stamped fitness records consumed by the signal engines
// ABOUTME: Defines the Record trait and flexible calendar-date parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! Input records.
//!
//! Every record is identified by a calendar date with no time-of-day
//! significance. Records are immutable inputs: the engines borrow them for the
//! duration of a single call and never retain them.

mod metric;
mod workout;

pub use metric::{MetricKind, MetricSample};
pub use workout::WorkoutEvent;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Any date-stamped entity the engines can bucket or filter
pub trait Record {
    /// Calendar date the record belongs to
    fn date(&self) -> NaiveDate;
}

impl<T: Record + ?Sized> Record for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or a full ISO 8601 timestamp
///
/// Timestamps keep the calendar date as written in their own offset; no
/// conversion to another zone takes place.
#[must_use]
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Custom deserializer for flexible date parsing
/// Accepts both simple dates ("2024-06-03") and ISO 8601 datetimes ("2024-06-03T07:15:00Z")
pub(crate) fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_calendar_date(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid date format: '{s}'. Expected 'YYYY-MM-DD' or 'YYYY-MM-DDTHH:MM:SSZ'"
        ))
    })
}
