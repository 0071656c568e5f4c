//! # trellis-csv
//!
//! CSV tokenizer, reader and writer for trellis tables.
//!
//! Parsing is a single pass over the text: the [`CsvTokenizer`] state
//! machine emits positioned fields, and [`CsvReader`] grows a
//! [`Table`](trellis_core::Table) around them. [`CsvWriter`] performs the
//! inverse, producing text that parses back to the same table.
//!
//! ## Example
//!
//! ```rust
//! use trellis_csv::{CsvReader, CsvReadOptions, CsvWriter, CsvWriteOptions};
//!
//! let options = CsvReadOptions { has_header: true, ..Default::default() };
//! let table = CsvReader::parse("name,age\nalice,30", &options).unwrap();
//!
//! assert_eq!(table.get_cell(0, "age").unwrap().to_string(), "30");
//!
//! let out = CsvWriter::to_string(&table, &CsvWriteOptions {
//!     write_header: true,
//!     ..Default::default()
//! });
//! assert_eq!(out, "name,age\r\nalice,30");
//! ```

mod compare;
mod error;
mod options;
mod reader;
mod tokenizer;
mod writer;

pub use compare::csv_equal;
pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use tokenizer::{CsvTokenizer, Field};
pub use writer::CsvWriter;
