//! # trellis
//!
//! A Rust library for sparse, labeled 2D tables with CSV round-trip
//! support.
//!
//! ## Features
//!
//! - Sparse tables: cells are created lazily, unassigned cells read as empty
//! - Columns addressable by numeric index or textual label
//! - Structural editing: insert/remove rows and columns at any position
//! - CSV parsing with auto-detected CR/LF/CRLF line breaks and quoted fields
//! - CSV serialization that quotes exactly the fields that need it
//!
//! ## Example
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let options = CsvReadOptions { has_header: true, ..Default::default() };
//! let mut table = CsvReader::parse("name,age\nalice,30\nbob,25", &options).unwrap();
//!
//! // Address columns by label or index
//! assert_eq!(table.get_cell(1, "name").unwrap().to_string(), "bob");
//!
//! // Insert a column before "age" and fill it
//! table.add_columns_with_labels(1, &["city"], Some(1)).unwrap();
//! table.set_cell(0, "city", "berlin").unwrap();
//!
//! let out = CsvWriter::to_string(&table, &CsvWriteOptions {
//!     write_header: true,
//!     ..Default::default()
//! });
//! assert_eq!(out, "name,city,age\r\nalice,berlin,30\r\nbob,,25");
//! ```

pub mod prelude;

// Re-export core types
pub use trellis_core::{
    CellCoord,
    CellStore,
    // Cell types
    CellValue,
    ColumnLabelRegistry,
    ColumnRef,
    // Error types
    Error,
    Result,
    SharedString,
    StringPool,
    // Main type
    Table,
};

// Re-export CSV types
pub use trellis_csv::{
    csv_equal, CsvError, CsvReadOptions, CsvReader, CsvResult, CsvTokenizer, CsvWriteOptions,
    CsvWriter, Field, LineTerminator,
};

use std::path::Path;

/// Extension trait for Table to add CSV file I/O
pub trait TableCsvExt: Sized {
    /// Load a table from a CSV file
    fn open_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self>;

    /// Save the table to a CSV file
    fn save_csv<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> CsvResult<()>;
}

impl TableCsvExt for Table {
    fn open_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        CsvReader::read_file(path, options)
    }

    fn save_csv<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> CsvResult<()> {
        CsvWriter::write_file(self, path, options)
    }
}
