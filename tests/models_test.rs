// ABOUTME: Tests for record deserialization and result serialization
// ABOUTME: Verifies flexible date parsing and the "absent means no data" JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use serde_json::json;
use stride_signals::errors::{AppError, ErrorCode};
use stride_signals::intelligence::{StreakResult, TrendResult};
use stride_signals::models::{MetricKind, MetricSample, Record, WorkoutEvent};

#[test]
fn test_workout_from_json_document() {
    let workout: WorkoutEvent = serde_json::from_value(json!({
        "date": "2024-06-03T07:15:00Z",
        "durationMinutes": 50,
        "type": "run",
        "source": "strava"
    }))
    .unwrap();

    assert_eq!(workout.date, date("2024-06-03"));
    assert_eq!(workout.duration_minutes, 50);
    assert_eq!(workout.workout_type, "run");
    assert_eq!(workout.source, "strava");
    assert_eq!(Record::date(&workout), date("2024-06-03"));
}

#[test]
fn test_workout_optional_fields_default() {
    let workout: WorkoutEvent = serde_json::from_value(json!({ "date": "2024-06-03" })).unwrap();
    assert_eq!(workout.duration_minutes, 0);
    assert!(workout.workout_type.is_empty());
}

#[test]
fn test_timestamp_keeps_calendar_date_as_written() {
    let workout: WorkoutEvent =
        serde_json::from_value(json!({ "date": "2024-06-03T23:45:00-08:00" })).unwrap();
    assert_eq!(workout.date, date("2024-06-03"));
}

#[test]
fn test_malformed_date_rejected() {
    let result: Result<WorkoutEvent, _> =
        serde_json::from_value(json!({ "date": "June 3rd", "type": "run" }));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Invalid date format"));
}

#[test]
fn test_metric_sample_from_json_document() {
    let sample: MetricSample = serde_json::from_value(json!({
        "date": "2024-06-03",
        "numericValue": 18.5,
        "kind": "bodyFat"
    }))
    .unwrap();

    assert_eq!(sample.kind, MetricKind::BodyFat);
    assert!((sample.value - 18.5).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_metric_kind_rejected() {
    let result: Result<MetricSample, _> = serde_json::from_value(json!({
        "date": "2024-06-03",
        "numericValue": 1.0,
        "kind": "mood"
    }));
    assert!(result.is_err());
}

#[test]
fn test_metric_kind_identifiers_match_json() {
    for kind in MetricKind::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn test_trend_result_without_data_omits_average() {
    let json = serde_json::to_value(TrendResult::default()).unwrap();
    assert_eq!(json, json!({ "sampleCount": 0 }));

    let with_data = TrendResult {
        average: Some(179.0),
        sample_count: 2,
    };
    assert_eq!(
        serde_json::to_value(with_data).unwrap(),
        json!({ "average": 179.0, "sampleCount": 2 })
    );
}

#[test]
fn test_streak_result_field_names() {
    let json = serde_json::to_value(StreakResult {
        week_count: 2,
        current_week_workouts: 3,
    })
    .unwrap();
    assert_eq!(json, json!({ "weekCount": 2, "currentWeekWorkouts": 3 }));
}

#[test]
fn test_app_error_display_and_json() {
    let error = AppError::value_out_of_range("Window must be positive");
    assert_eq!(
        error.to_string(),
        "The provided value is out of range: Window must be positive"
    );
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "code": "VALUE_OUT_OF_RANGE", "message": "Window must be positive" })
    );
}

#[test]
fn test_error_code_wire_names_and_classes() {
    let cases = [
        (ErrorCode::InvalidInput, "INVALID_INPUT", true),
        (ErrorCode::InvalidFormat, "INVALID_FORMAT", true),
        (ErrorCode::ValueOutOfRange, "VALUE_OUT_OF_RANGE", true),
        (ErrorCode::ConfigInvalid, "CONFIG_INVALID", false),
    ];

    for (code, wire, validation) in cases {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(wire));
        assert_eq!(code.is_validation(), validation, "{wire}");
        assert!(!code.description().is_empty());
    }
}
