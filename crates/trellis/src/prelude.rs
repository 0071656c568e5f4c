//! Prelude module - common imports for trellis users
//!
//! ```rust
//! use trellis::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    ColumnRef,

    CsvError,
    // CSV options
    CsvReadOptions,
    // CSV I/O
    CsvReader,
    CsvResult,
    CsvWriteOptions,
    CsvWriter,

    // Error types
    Error,
    LineTerminator,
    Result,

    // Main type
    Table,
    // Extension traits
    TableCsvExt,
};
