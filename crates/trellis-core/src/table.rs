//! Table type
//!
//! A sparse 2D table with X columns and Y rows where each cell can store
//! any [`CellValue`]. Columns can be labeled with a textual name which can
//! be used to address them anywhere a numeric index is accepted.

use crate::error::{Error, Result};
use crate::labels::ColumnLabelRegistry;
use crate::store::{CellCoord, CellStore};
use crate::value::CellValue;

/// A column reference: either a numeric index or a textual label
///
/// Every column-addressed [`Table`] operation accepts `impl Into<ColumnRef>`,
/// so callers can pass a `u32` index or a `&str` label interchangeably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// 0-based column index
    Index(u32),
    /// Column label, resolved through the label registry
    Label(String),
}

impl From<u32> for ColumnRef {
    fn from(index: u32) -> Self {
        ColumnRef::Index(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(label: &str) -> Self {
        ColumnRef::Label(label.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(label: String) -> Self {
        ColumnRef::Label(label)
    }
}

/// A sparse two-dimensional labeled table
///
/// Cells are created lazily: the coordinate space is `rows x columns`, but
/// only cells that have been assigned a value occupy memory. Reading an
/// unassigned in-bounds cell yields [`CellValue::Empty`].
///
/// The dimension counters, cell store and label registry are owned
/// exclusively by the table; all mutation goes through this API so the
/// structural invariants hold centrally. The table is not internally
/// synchronized; embedders that share one across threads must serialize
/// access themselves, since row/column shifts touch a data-dependent
/// number of stored cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: u32,
    columns: u32,
    cells: CellStore,
    labels: ColumnLabelRegistry,
}

impl Table {
    /// Create an empty 0x0 table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given dimensions
    ///
    /// Fails with [`Error::InvalidDimensions`] if exactly one of the two
    /// counts is zero: a table cannot have rows without columns or columns
    /// without rows.
    pub fn with_size(rows: u32, columns: u32) -> Result<Self> {
        if (rows == 0) != (columns == 0) {
            return Err(Error::InvalidDimensions { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            ..Self::default()
        })
    }

    /// Create a table whose column count and labels come from a label list
    ///
    /// Empty strings in the list leave the corresponding column unlabeled;
    /// duplicate non-empty entries fail with [`Error::DuplicateLabel`].
    pub fn with_labels<S: AsRef<str>>(rows: u32, labels: &[S]) -> Result<Self> {
        let mut table = Self::with_size(rows, labels.len() as u32)?;
        table.set_column_names(labels)?;
        Ok(table)
    }

    // === Cell access ===

    /// Get the value stored at a cell
    ///
    /// Returns [`CellValue::Empty`] for an in-bounds cell that has never
    /// been assigned.
    pub fn get_cell(&self, row: u32, column: impl Into<ColumnRef>) -> Result<CellValue> {
        let row = self.check_row(row)?;
        let col = self.resolve_column(column.into())?;

        Ok(self
            .cells
            .get(row, col)
            .cloned()
            .unwrap_or(CellValue::Empty))
    }

    /// Set the value for a cell
    ///
    /// Storing [`CellValue::Empty`] clears the cell.
    pub fn set_cell(
        &mut self,
        row: u32,
        column: impl Into<ColumnRef>,
        value: impl Into<CellValue>,
    ) -> Result<()> {
        let row = self.check_row(row)?;
        let col = self.resolve_column(column.into())?;

        self.cells.set(row, col, value.into());
        Ok(())
    }

    // === Row operations ===

    /// Get all values of a row, densely (unassigned cells become `Empty`)
    pub fn get_row(&self, row: u32) -> Result<Vec<CellValue>> {
        let row = self.check_row(row)?;

        Ok((0..self.columns)
            .map(|col| {
                self.cells
                    .get(row, col)
                    .cloned()
                    .unwrap_or(CellValue::Empty)
            })
            .collect())
    }

    /// Fill all the data for a row
    ///
    /// The data length must equal the column count.
    pub fn set_row(&mut self, row: u32, data: &[CellValue]) -> Result<()> {
        let row = self.check_row(row)?;

        if data.len() != self.columns as usize {
            return Err(Error::LengthMismatch {
                expected: self.columns as usize,
                actual: data.len(),
            });
        }

        for (col, value) in data.iter().enumerate() {
            self.cells.set(row, col as u32, value.clone());
        }
        Ok(())
    }

    /// Add `count` empty rows
    ///
    /// With `at = None` the rows are appended at the bottom. Otherwise they
    /// are inserted before row `at`, and every existing row at or after
    /// `at` moves down by `count`.
    pub fn add_rows(&mut self, count: u32, at: Option<u32>) -> Result<()> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        if let Some(at) = at {
            if at >= self.rows {
                return Err(Error::InvalidPosition {
                    position: at,
                    limit: self.rows,
                });
            }

            // Shift down from the highest row first so a cell is never
            // renamed onto a coordinate that has not been vacated yet.
            for row in (at..self.rows).rev() {
                for col in 0..self.columns {
                    self.cells
                        .rename(CellCoord::new(row, col), CellCoord::new(row + count, col));
                }
            }
        }

        self.rows += count;
        Ok(())
    }

    /// Delete a row and all its cells
    ///
    /// Rows after the removed one move up by one. If the last row is
    /// removed, the column count is forced back to zero as well.
    pub fn remove_row(&mut self, row: u32) -> Result<()> {
        let row = self.check_row(row)?;

        for col in 0..self.columns {
            self.cells.remove(row, col);
        }

        // Shift up from the removed index first so no move collides.
        for from in (row + 1)..self.rows {
            for col in 0..self.columns {
                self.cells
                    .rename(CellCoord::new(from, col), CellCoord::new(from - 1, col));
            }
        }

        self.rows -= 1;

        if self.rows == 0 {
            self.columns = 0;
            self.labels.clear();
        }
        Ok(())
    }

    // === Column operations ===

    /// Get all values of a column, densely (unassigned cells become `Empty`)
    pub fn get_column(&self, column: impl Into<ColumnRef>) -> Result<Vec<CellValue>> {
        let col = self.resolve_column(column.into())?;

        Ok((0..self.rows)
            .map(|row| {
                self.cells
                    .get(row, col)
                    .cloned()
                    .unwrap_or(CellValue::Empty)
            })
            .collect())
    }

    /// Fill all the data for a column
    ///
    /// The data length must equal the row count.
    pub fn set_column(&mut self, column: impl Into<ColumnRef>, data: &[CellValue]) -> Result<()> {
        let col = self.resolve_column(column.into())?;

        if data.len() != self.rows as usize {
            return Err(Error::LengthMismatch {
                expected: self.rows as usize,
                actual: data.len(),
            });
        }

        for (row, value) in data.iter().enumerate() {
            self.cells.set(row as u32, col, value.clone());
        }
        Ok(())
    }

    /// Add `count` empty, unlabeled columns
    ///
    /// With `at = None` the columns are appended at the right edge.
    /// Otherwise they are inserted before column `at`, and every existing
    /// column at or after `at` (label and cells) moves right by `count`.
    pub fn add_columns(&mut self, count: u32, at: Option<u32>) -> Result<()> {
        self.insert_columns::<&str>(count, &[], at)
    }

    /// Add `count` labeled columns
    ///
    /// Like [`add_columns`], but also assigns a label to each new column.
    /// The label list length must equal `count`; empty strings leave the
    /// column unlabeled. All validation happens before any cell moves.
    ///
    /// [`add_columns`]: Table::add_columns
    pub fn add_columns_with_labels<S: AsRef<str>>(
        &mut self,
        count: u32,
        labels: &[S],
        at: Option<u32>,
    ) -> Result<()> {
        if labels.len() != count as usize {
            return Err(Error::LengthMismatch {
                expected: count as usize,
                actual: labels.len(),
            });
        }
        self.insert_columns(count, labels, at)
    }

    fn insert_columns<S: AsRef<str>>(
        &mut self,
        count: u32,
        labels: &[S],
        at: Option<u32>,
    ) -> Result<()> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        if let Some(at) = at {
            if at >= self.columns {
                return Err(Error::InvalidPosition {
                    position: at,
                    limit: self.columns,
                });
            }
        }

        // Validate the new labels against each other and against the
        // existing ones before any shift, so a failure mutates nothing.
        for (i, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            if label.is_empty() {
                continue;
            }
            let clashes_within = labels[..i].iter().any(|prev| prev.as_ref() == label);
            if clashes_within || self.labels.resolve(label).is_some() {
                return Err(Error::DuplicateLabel(label.to_string()));
            }
        }

        if let Some(at) = at {
            // Shift right from the highest column first so a cell is never
            // renamed onto a coordinate that has not been vacated yet.
            for col in (at..self.columns).rev() {
                self.labels.rename(col, col + count);
                for row in 0..self.rows {
                    self.cells
                        .rename(CellCoord::new(row, col), CellCoord::new(row, col + count));
                }
            }
        }

        let base = at.unwrap_or(self.columns);
        for (i, label) in labels.iter().enumerate() {
            self.labels.set(base + i as u32, label.as_ref())?;
        }

        self.columns += count;
        Ok(())
    }

    /// Delete a column, with its label and cells, from the table
    ///
    /// Columns after the removed one move left by one. If the last column
    /// is removed, the row count is forced back to zero as well.
    pub fn remove_column(&mut self, column: impl Into<ColumnRef>) -> Result<()> {
        let col = self.resolve_column(column.into())?;

        self.labels.remove(col);
        for row in 0..self.rows {
            self.cells.remove(row, col);
        }

        // Shift left from the removed index first so no move collides.
        for from in (col + 1)..self.columns {
            self.labels.rename(from, from - 1);
            for row in 0..self.rows {
                self.cells
                    .rename(CellCoord::new(row, from), CellCoord::new(row, from - 1));
            }
        }

        self.columns -= 1;

        if self.columns == 0 {
            self.rows = 0;
            self.labels.clear();
        }
        Ok(())
    }

    // === Column names ===

    /// Set the label of an existing column
    ///
    /// Fails with [`Error::DuplicateLabel`] if another column already
    /// carries the (non-empty) label; the target column keeps its previous
    /// label in that case.
    pub fn set_column_name(&mut self, column: impl Into<ColumnRef>, name: &str) -> Result<()> {
        let col = self.resolve_column(column.into())?;
        self.labels.set(col, name)
    }

    /// Replace the labels of all columns at once
    ///
    /// The list must have exactly one entry per column; duplicate
    /// non-empty entries are rejected before anything changes.
    pub fn set_column_names<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.len() != self.columns as usize {
            return Err(Error::LengthMismatch {
                expected: self.columns as usize,
                actual: names.len(),
            });
        }

        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if !name.is_empty() && names[..i].iter().any(|prev| prev.as_ref() == name) {
                return Err(Error::DuplicateLabel(name.to_string()));
            }
        }

        self.labels.clear();
        for (i, name) in names.iter().enumerate() {
            self.labels.set(i as u32, name.as_ref())?;
        }
        Ok(())
    }

    /// Get the label of a column by index (`""` if unlabeled)
    pub fn column_name(&self, index: u32) -> Result<&str> {
        if index >= self.columns {
            return Err(Error::ColumnOutOfBounds(index, self.columns));
        }
        Ok(self.labels.get(index))
    }

    /// Get all column labels in column order
    ///
    /// Unlabeled columns contribute empty strings.
    pub fn column_names(&self) -> Vec<String> {
        (0..self.columns)
            .map(|index| self.labels.get(index).to_string())
            .collect()
    }

    /// Get the numeric index of the column carrying a label
    pub fn column_index(&self, name: &str) -> Result<u32> {
        self.labels
            .resolve(name)
            .filter(|&index| index < self.columns)
            .ok_or_else(|| Error::UnknownLabel(name.to_string()))
    }

    // === Counts ===

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> u32 {
        self.columns
    }

    /// Theoretical cell capacity (`rows x columns`), not the sparse count
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }

    /// Number of cells that actually hold a value
    pub fn stored_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over all stored cells as (row, column, value), unordered
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> {
        self.cells
            .iter()
            .map(|(coord, value)| (coord.row, coord.col, value))
    }

    // === Validation ===

    fn check_row(&self, row: u32) -> Result<u32> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows));
        }
        Ok(row)
    }

    fn resolve_column(&self, column: ColumnRef) -> Result<u32> {
        let index = match column {
            ColumnRef::Index(index) => index,
            ColumnRef::Label(label) => self
                .labels
                .resolve(&label)
                .ok_or(Error::UnknownLabel(label))?,
        };

        if index >= self.columns {
            return Err(Error::ColumnOutOfBounds(index, self.columns));
        }
        Ok(index)
    }
}
