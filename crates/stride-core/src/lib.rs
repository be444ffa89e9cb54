// ABOUTME: Core types and errors for the stride fitness signals workspace
// ABOUTME: Foundation crate with record models, error codes, and shared defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Shared types for the stride signal engines. The records defined here are
//! supplied by the caller as already-materialized snapshots; nothing in this
//! crate performs I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **models**: date-stamped records (`WorkoutEvent`, `MetricSample`) and the `Record` trait
//! - **constants**: default thresholds and window sizes

/// Unified error handling with standard error codes
pub mod errors;

/// Date-stamped input records consumed by the engines
pub mod models;

/// Default policy values organized by domain
pub mod constants;
