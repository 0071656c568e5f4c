//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV text the grammar cannot represent faithfully (strict mode only)
    #[error("malformed CSV at row {row}, column {column}: {message}")]
    Malformed {
        /// Row index of the offending field
        row: u32,
        /// Column index of the offending field
        column: u32,
        /// What could not be represented
        message: String,
    },

    /// Table error
    #[error("table error: {0}")]
    Table(#[from] trellis_core::Error),
}
