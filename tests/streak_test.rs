// ABOUTME: Tests for the weekly workout streak engine
// ABOUTME: Covers thresholds, gaps, partial current weeks, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, week_of_workouts, weeks_before, workout, workouts};
use stride_signals::errors::ErrorCode;
use stride_signals::intelligence::streak::weekly_workout_counts;
use stride_signals::intelligence::{StreakCalculator, StreakPolicy};
use stride_signals::models::WorkoutEvent;

/// Wednesday; its week starts Monday 2024-06-10
const TODAY: &str = "2024-06-12";

fn calculator() -> StreakCalculator {
    StreakCalculator::default()
}

fn current_monday() -> chrono::NaiveDate {
    date("2024-06-10")
}

#[test]
fn test_default_policy_requires_three_workouts() {
    assert_eq!(StreakPolicy::default().min_workouts_per_week, 3);
    assert_eq!(calculator().policy(), StreakPolicy::default());
}

#[test]
fn test_empty_workouts_streak_zero() {
    let result = calculator().current_streak(&[], date(TODAY)).unwrap();
    assert_eq!(result.week_count, 0);
    assert_eq!(result.current_week_workouts, 0);
}

#[test]
fn test_two_consecutive_qualifying_weeks() {
    let history = workouts(&[
        "2024-06-03",
        "2024-06-04",
        "2024-06-05",
        "2024-06-10",
        "2024-06-11",
        "2024-06-12",
    ]);

    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 2);
    assert_eq!(result.current_week_workouts, 3);
}

#[test]
fn test_current_week_below_threshold_reads_zero() {
    let mut history = week_of_workouts(weeks_before(current_monday(), 1), 5);
    history.extend(week_of_workouts(weeks_before(current_monday(), 2), 5));
    history.extend(workouts(&["2024-06-10", "2024-06-11"]));

    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 0);
    assert_eq!(result.current_week_workouts, 2);
}

#[test]
fn test_only_current_week_below_threshold() {
    let history = workouts(&["2024-06-10", "2024-06-11"]);
    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 0);
}

#[test]
fn test_exact_threshold_qualifies() {
    let history = week_of_workouts(current_monday(), 3);
    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 1);
}

#[test]
fn test_empty_week_breaks_streak() {
    let mut history = week_of_workouts(current_monday(), 3);
    // one week back has no workouts at all
    history.extend(week_of_workouts(weeks_before(current_monday(), 2), 4));
    history.extend(week_of_workouts(weeks_before(current_monday(), 3), 4));

    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 1);
}

#[test]
fn test_non_qualifying_week_between_runs() {
    let mut history = week_of_workouts(current_monday(), 3);
    history.extend(week_of_workouts(weeks_before(current_monday(), 1), 3));
    history.extend(week_of_workouts(weeks_before(current_monday(), 2), 1));
    history.extend(week_of_workouts(weeks_before(current_monday(), 3), 3));
    history.extend(week_of_workouts(weeks_before(current_monday(), 4), 3));

    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 2);
}

#[test]
fn test_k_consecutive_weeks_yield_k() {
    for k in 1..=8 {
        let history: Vec<WorkoutEvent> = (0..k)
            .flat_map(|back| week_of_workouts(weeks_before(current_monday(), back), 3))
            .collect();

        let result = calculator().current_streak(&history, date(TODAY)).unwrap();
        assert_eq!(u64::from(result.week_count), k, "k = {k}");
    }
}

#[test]
fn test_streak_stops_at_earliest_recorded_week() {
    let mut history = week_of_workouts(current_monday(), 4);
    history.extend(week_of_workouts(weeks_before(current_monday(), 1), 4));

    let result = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 2);
}

#[test]
fn test_extra_workout_in_qualifying_week_is_idempotent() {
    let mut history = week_of_workouts(current_monday(), 3);
    history.extend(week_of_workouts(weeks_before(current_monday(), 1), 3));
    let before = calculator().current_streak(&history, date(TODAY)).unwrap();

    history.push(workout("2024-06-07"));
    let after = calculator().current_streak(&history, date(TODAY)).unwrap();

    assert_eq!(before.week_count, after.week_count);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut history = workouts(&[
        "2024-06-12",
        "2024-06-03",
        "2024-06-11",
        "2024-06-05",
        "2024-06-10",
        "2024-06-04",
    ]);
    let forward = calculator().current_streak(&history, date(TODAY)).unwrap();
    history.reverse();
    let reversed = calculator().current_streak(&history, date(TODAY)).unwrap();

    assert_eq!(forward, reversed);
    assert_eq!(forward.week_count, 2);
}

#[test]
fn test_custom_threshold() {
    let history = workouts(&["2024-06-12", "2024-06-05", "2024-05-29"]);
    let relaxed = StreakCalculator::new(StreakPolicy::new(1).unwrap());

    let result = relaxed.current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(result.week_count, 3);

    let strict = calculator().current_streak(&history, date(TODAY)).unwrap();
    assert_eq!(strict.week_count, 0);
}

#[test]
fn test_zero_threshold_rejected() {
    let err = StreakPolicy::new(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let invalid = StreakCalculator::new(StreakPolicy {
        min_workouts_per_week: 0,
    });
    let err = invalid
        .current_streak(&workouts(&["2024-06-10"]), date(TODAY))
        .unwrap_err();
    assert!(err.is_invalid_parameter());
    assert!(invalid.longest_streak(&[]).is_err());
}

#[test]
fn test_workout_after_reference_rejected() {
    let history = workouts(&["2024-06-10", "2024-06-13"]);
    let err = calculator()
        .current_streak(&history, date(TODAY))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("2024-06-13"));
}

#[test]
fn test_weekly_counts_keyed_by_monday() {
    let counts = weekly_workout_counts(&workouts(&[
        "2024-06-03",
        "2024-06-09",
        "2024-06-10",
        "2024-06-12",
        "2024-06-12",
    ]))
    .unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&date("2024-06-03")], 2);
    assert_eq!(counts[&date("2024-06-10")], 3);
}

#[test]
fn test_longest_streak_across_history() {
    let mut history = Vec::new();
    for back in [0, 1] {
        history.extend(week_of_workouts(weeks_before(current_monday(), back), 3));
    }
    // week 2 back is a gap
    for back in [3, 4, 5] {
        history.extend(week_of_workouts(weeks_before(current_monday(), back), 3));
    }
    // week 6 back does not qualify
    history.extend(week_of_workouts(weeks_before(current_monday(), 6), 2));
    history.extend(week_of_workouts(weeks_before(current_monday(), 7), 3));

    assert_eq!(calculator().longest_streak(&history).unwrap(), 3);
    assert_eq!(
        calculator().current_streak(&history, date(TODAY)).unwrap().week_count,
        2
    );
}

#[test]
fn test_longest_streak_empty_history() {
    assert_eq!(calculator().longest_streak(&[]).unwrap(), 0);
}

#[test]
fn test_workout_in_unrepresentable_week_rejected() {
    let earliest = chrono::NaiveDate::MIN;
    let history = [WorkoutEvent::new(earliest, 30, "run", "manual")];

    let err = calculator()
        .current_streak(&history, date(TODAY))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(calculator().longest_streak(&history).is_err());
}
