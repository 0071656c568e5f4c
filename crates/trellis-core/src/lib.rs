//! # trellis-core
//!
//! Core data structures for the trellis table library.
//!
//! This crate provides the fundamental types used throughout trellis:
//! - [`CellValue`] - Represents cell values (strings, numbers, booleans, nested tables)
//! - [`CellStore`] and [`CellCoord`] - Sparse coordinate-keyed cell storage
//! - [`ColumnLabelRegistry`] - Mapping between column indices and labels
//! - [`Table`] - The sparse 2D labeled table itself
//!
//! ## Example
//!
//! ```rust
//! use trellis_core::{CellValue, Table};
//!
//! let mut table = Table::with_labels(2, &["name", "age"]).unwrap();
//!
//! // Columns can be addressed by index or by label
//! table.set_cell(0, "name", "alice").unwrap();
//! table.set_cell(0, 1u32, 30).unwrap();
//!
//! assert_eq!(table.get_cell(0, 0u32).unwrap(), CellValue::string("alice"));
//! // Cells are created lazily; unassigned ones read as Empty
//! assert_eq!(table.get_cell(1, "age").unwrap(), CellValue::Empty);
//! ```

pub mod error;
pub mod labels;
pub mod store;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use labels::ColumnLabelRegistry;
pub use store::{CellCoord, CellStore};
pub use table::{ColumnRef, Table};
pub use value::{CellValue, SharedString, StringPool};
