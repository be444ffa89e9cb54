// ABOUTME: Facade crate for the stride fitness signals engines
// ABOUTME: Re-exports core types and engines and adds dashboard composition and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

#![deny(unsafe_code)]

//! # Stride Signals
//!
//! Derives signal metrics from time-stamped personal fitness records: a weekly
//! consistency streak, rolling trend averages, and period-bounded aggregates.
//!
//! The caller loads records (workouts, body metrics, physiological samples) from
//! wherever they are persisted and passes immutable snapshots into the engines.
//! Each engine returns a plain result value; none of them perform I/O.
//!
//! ## Modules
//!
//! - **errors** / **models**: re-exported from `stride-core`
//! - **intelligence**: the engines, re-exported from `stride-intelligence`
//! - **dashboard**: computes every signal for a snapshot with per-metric failure isolation
//! - **logging**: `tracing-subscriber` setup for binaries embedding the engines

pub use stride_core::{constants, errors, models};
pub use stride_intelligence as intelligence;

/// Per-metric isolated computation of every signal for a record snapshot
pub mod dashboard;

/// Structured logging configuration
pub mod logging;
