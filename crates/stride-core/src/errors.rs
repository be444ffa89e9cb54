// ABOUTME: Error codes and the AppError type shared by every stride engine
// ABOUTME: Distinguishes invalid parameters from configuration failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness Signals

//! # Error Handling
//!
//! The engines are pure arithmetic over caller-supplied data, so the taxonomy is
//! narrow: parameter validation failures and configuration failures. Absence of
//! data is never an error; it is modeled as an explicit empty result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input data is inconsistent or not a usable value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric parameter or date outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration value missing or rejected
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Human-readable description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The provided data format is invalid",
            Self::ValueOutOfRange => "The provided value is out of range",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Whether this code belongs to the invalid-parameter class
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange
        )
    }
}

/// Application error carrying a code and a caller-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Details about what was rejected
    pub message: String,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input, such as records dated after the reference date
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed value that cannot be interpreted (e.g. an unparsable date)
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Numeric parameter outside its valid range
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration could not be loaded or validated
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// True when the caller passed a parameter the engines refuse to coerce
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        self.code.is_validation()
    }
}
