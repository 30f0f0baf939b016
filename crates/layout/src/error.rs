//! Error types for layout fit checks.
//!
//! Layout itself never fails: it always produces geometry whose row heights
//! sum to the available height. These errors are produced on request by
//! [`CardLayout::ensure_fits`](crate::CardLayout::ensure_fits) when the
//! caller wants to treat an under-allocated card as a failure.

use thiserror::Error;

/// Errors reported when a laid-out card does not fit its rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Group padding alone consumes the whole card height.
    #[error("no height left for rows: available height is {available}")]
    NonPositiveBudget {
        /// Card height minus all group paddings.
        available: i32,
    },

    /// A row was allocated less than its minimum height.
    #[error("row '{row}' in group '{group}' needs {minimum} but was allocated {allocated}")]
    InsufficientBudget {
        /// Key of the group holding the row.
        group: String,
        /// Key of the row.
        row: String,
        /// Height the row received.
        allocated: i32,
        /// Height the row needs to show its content.
        minimum: i32,
    },
}

/// A specialized Result type for layout fit checks.
pub type Result<T> = std::result::Result<T, LayoutError>;
