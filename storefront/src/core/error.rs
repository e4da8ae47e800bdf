//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! ## Error Categories
//!
//! - **Fetch**: network failure or a non-2xx response with no structured body
//! - **Validation**: a structured `{"error": ...}` message returned by the API
//! - **MissingField**: a required form field is empty (local pre-submission check)
//! - **InvalidNumber**: a numeric form field failed to parse or is out of
//!   range (local pre-submission check)
//!
//! Every error is terminal for the operation that produced it; nothing is
//! retried. The local variants never reach the network layer, and remote
//! errors are caught at the controller boundary and converted into a
//! user-facing notification.

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries the complete, user-facing message (the product
/// speaks Spanish), so controllers can hand `to_string()` straight to the
/// notification service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Network failure or non-2xx response without a structured error body.
    #[error("{0}")]
    Fetch(String),

    /// Structured error message surfaced by the remote system on a rejected
    /// write (`{"error": "..."}`).
    #[error("{0}")]
    Validation(String),

    /// A required form field is empty or no image has been selected.
    #[error("{0}")]
    MissingField(String),

    /// A numeric form field failed to parse or violates its range rule.
    #[error("{0}")]
    InvalidNumber(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
