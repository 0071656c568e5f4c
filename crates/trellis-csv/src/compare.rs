//! CSV-level table comparison

use trellis_core::Table;

/// Check if two tables represent the same CSV data
///
/// Dimensions and column names must match, and every cell must render to
/// the same text, so an unassigned cell equals one holding an empty
/// string. That is exactly how the two survive a serialize/parse round
/// trip.
pub fn csv_equal(a: &Table, b: &Table) -> bool {
    if a.row_count() != b.row_count() || a.column_count() != b.column_count() {
        return false;
    }
    if a.column_names() != b.column_names() {
        return false;
    }

    for row in 0..a.row_count() {
        match (a.get_row(row), b.get_row(row)) {
            (Ok(row_a), Ok(row_b)) => {
                let equal = row_a
                    .iter()
                    .zip(row_b.iter())
                    .all(|(va, vb)| va.to_string() == vb.to_string());
                if !equal {
                    return false;
                }
            }
            _ => return false,
        }
    }

    true
}
