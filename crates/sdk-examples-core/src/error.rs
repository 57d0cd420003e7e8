// crates/sdk-examples-core/src/error.rs
// ============================================================================
// Module: Example Errors
// Description: Shared error type for SDK example operations.
// Purpose: Give every example one failure surface for tests and binaries.
// Dependencies: aws-smithy-types, thiserror
// ============================================================================

//! ## Overview
//! Example operations return [`ExampleError`]. SDK failures are rendered with
//! the SDK's full error context so the message names the service error code
//! rather than a bare "service error".

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_smithy_types::error::display::DisplayErrorContext;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors returned by example operations.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// Caller-supplied input was rejected before any SDK call.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The SDK reported a failure for an operation.
    #[error("{operation} failed: {message}")]
    Sdk {
        /// Operation name.
        operation: &'static str,
        /// Rendered SDK error.
        message: String,
    },
    /// The SDK response lacked a field the example requires.
    #[error("{operation} response missing {field}")]
    MissingField {
        /// Operation name.
        operation: &'static str,
        /// Missing field name.
        field: &'static str,
    },
    /// Local I/O failure.
    #[error("io error: {0}")]
    Io(String),
    /// Async runtime failure.
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl ExampleError {
    /// Wraps an SDK error for `operation`.
    #[must_use]
    pub fn sdk<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error,
    {
        Self::Sdk {
            operation,
            message: DisplayErrorContext(err).to_string(),
        }
    }

    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Sdk {
                ..
            } => "sdk",
            Self::MissingField {
                ..
            } => "missing_field",
            Self::Io(_) => "io",
            Self::Runtime(_) => "runtime",
        }
    }
}
