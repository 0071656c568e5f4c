//! Error types for trellis-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trellis-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Rows and columns must both be zero or both be positive
    #[error("invalid table dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions {
        /// Requested row count
        rows: u32,
        /// Requested column count
        columns: u32,
    },

    /// Row index out of bounds
    #[error("row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// A label string does not resolve to any column
    #[error("unknown column label: '{0}'")]
    UnknownLabel(String),

    /// A non-empty label is already assigned to another column
    #[error("duplicate column label: '{0}'")]
    DuplicateLabel(String),

    /// Data length does not match the target dimension
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Required number of values
        expected: usize,
        /// Number of values provided
        actual: usize,
    },

    /// Insert operations require a positive count
    #[error("count must be a positive integer")]
    InvalidCount,

    /// Insert position outside the valid range
    #[error("insert position {position} out of bounds (limit: {limit})")]
    InvalidPosition {
        /// Requested insert position
        position: u32,
        /// Current size of the dimension being inserted into
        limit: u32,
    },
}
