//! Error types for allocation requests.

use thiserror::Error;

/// Precondition failures reported by the allocators.
///
/// Every variant is deterministic: resubmitting the same request yields the
/// same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// No items were supplied.
    #[error("no valid allocation possible: item set is empty")]
    EmptyItems,

    /// Capacity is zero, negative or not a finite number.
    #[error("no valid allocation possible: capacity must be positive, got {0}")]
    InvalidCapacity(f64),

    /// An item failed input validation.
    #[error("invalid item at index {index}: {reason}")]
    InvalidItem {
        /// Position of the offending item in the input sequence.
        index: usize,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The discrete table would exceed the configured cell bound.
    #[error("dynamic-programming table too large: {cells} cells exceeds limit of {limit}")]
    TableTooLarge {
        /// Requested `(n + 1) * (W + 1)` cell count.
        cells: f64,
        /// Configured maximum.
        limit: usize,
    },

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;
