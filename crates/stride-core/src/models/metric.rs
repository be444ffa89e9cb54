// ABOUTME: Body metric and physiological sample records
// ABOUTME: One numeric value per date and kind, possibly missing on some days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

use super::{deserialize_flexible_date, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of measurement carried by a `MetricSample`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Body weight
    Weight,
    /// Body fat percentage
    BodyFat,
    /// Resting heart rate in BPM
    RestingHeartRate,
    /// Sleep duration in hours
    SleepDuration,
    /// Heart rate variability (RMSSD, ms)
    Hrv,
    /// Daily step count
    Steps,
}

impl MetricKind {
    /// Every known kind, in display order
    pub const ALL: [Self; 6] = [
        Self::Weight,
        Self::BodyFat,
        Self::RestingHeartRate,
        Self::SleepDuration,
        Self::Hrv,
        Self::Steps,
    ];

    /// Stable identifier matching the JSON representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFat => "bodyFat",
            Self::RestingHeartRate => "restingHeartRate",
            Self::SleepDuration => "sleepDuration",
            Self::Hrv => "hrv",
            Self::Steps => "steps",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single numeric measurement on a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    /// Calendar date of the measurement
    #[serde(deserialize_with = "deserialize_flexible_date")]
    pub date: NaiveDate,
    /// Measured value in the kind's native unit
    #[serde(rename = "numericValue")]
    pub value: f64,
    /// What was measured
    pub kind: MetricKind,
}

impl MetricSample {
    /// Create a metric sample
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64, kind: MetricKind) -> Self {
        Self { date, value, kind }
    }
}

impl Record for MetricSample {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
