// ABOUTME: Unified error handling for the profile linking service
// ABOUTME: Defines error codes, HTTP status mapping, and response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! # Unified Error Handling
//!
//! Centralized error types for the linking service. Every operation failure
//! maps to one member of the [`ErrorCode`] taxonomy, which in turn maps to an
//! HTTP status code for the routing layer. Unexpected store failures are
//! converted to [`ErrorCode::DatabaseError`] at the operation boundary with
//! the underlying cause logged server-side, never echoed to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    #[serde(rename = "ALREADY_LINKED")]
    AlreadyLinked = 4001,
    #[serde(rename = "CAPACITY_EXCEEDED")]
    CapacityExceeded = 4002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    #[serde(rename = "PIN_SPACE_EXHAUSTED")]
    PinSpaceExhausted = 9002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request - duplicate links and full accounts are caller
            // errors in this contract, not 409s
            ErrorCode::InvalidInput
            | ErrorCode::MissingRequiredField
            | ErrorCode::AlreadyLinked
            | ErrorCode::CapacityExceeded => 400,

            // 404 Not Found
            ErrorCode::ResourceNotFound => 404,

            // 500 Internal Server Error
            ErrorCode::InternalError | ErrorCode::DatabaseError | ErrorCode::PinSpaceExhausted => {
                500
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "The provided input is invalid",
            ErrorCode::MissingRequiredField => "A required field is missing from the request",
            ErrorCode::ResourceNotFound => "The requested resource was not found",
            ErrorCode::AlreadyLinked => "The client is already linked to this account",
            ErrorCode::CapacityExceeded => "The account has no free profile slots",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::DatabaseError => "Document store operation failed",
            ErrorCode::PinSpaceExhausted => "No free PIN could be allocated",
        }
    }
}

/// Unified error type for the service
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// A required request field is missing or empty
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{} is required", field.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Client already holds a profile on this account
    #[must_use]
    pub fn already_linked() -> Self {
        Self::new(
            ErrorCode::AlreadyLinked,
            "Client is already linked to this account",
        )
    }

    /// Account has reached its profile limit; the message embeds the limit
    #[must_use]
    pub fn capacity_exceeded(max_profiles: u32) -> Self {
        Self::new(
            ErrorCode::CapacityExceeded,
            format!("Account has reached the maximum limit of {max_profiles} profiles"),
        )
    }

    /// PIN generation gave up after the configured number of attempts
    #[must_use]
    pub fn pin_space_exhausted(attempts: u32) -> Self {
        Self::new(
            ErrorCode::PinSpaceExhausted,
            format!("Could not allocate a unique PIN after {attempts} attempts"),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Document store error; the caller-facing message stays generic
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

/// Conversion from `anyhow::Error` to `AppError`
///
/// Store-layer failures arrive as `anyhow::Error`; they become generic
/// database errors so internal detail never leaks into a response body.
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let source = Box::<dyn std::error::Error + Send + Sync>::from(error.to_string());
        Self {
            code: ErrorCode::DatabaseError,
            message: "Internal server error".to_owned(),
            source: Some(source),
        }
    }
}
