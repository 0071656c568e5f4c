//! CSV reader
//!
//! Drains the tokenizer into a [`Table`], growing it lazily as field
//! coordinates appear, then optionally promotes the first row to column
//! labels.

use std::fs;
use std::io::Read;
use std::path::Path;

use trellis_core::Table;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use crate::tokenizer::CsvTokenizer;

/// CSV reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, options)
    }

    /// Read CSV text from a reader into a table
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, options)
    }

    /// Parse CSV text into a table
    ///
    /// The table grows to fit every (row, column) the tokenizer emits, so
    /// short rows simply leave unassigned cells behind. A strict-mode
    /// tokenizer error aborts the parse; no partial table is returned.
    pub fn parse(input: &str, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut table = Table::new();

        for field in CsvTokenizer::new(input, options) {
            let field = field?;

            if field.row >= table.row_count() {
                table.add_rows(field.row - table.row_count() + 1, None)?;
            }
            if field.column >= table.column_count() {
                table.add_columns(field.column - table.column_count() + 1, None)?;
            }
            table.set_cell(field.row, field.column, field.value)?;
        }

        if options.has_header && table.row_count() > 0 {
            promote_header_row(&mut table)?;
        }

        Ok(table)
    }

    /// Check whether text parses as CSV under the default options
    pub fn is_csv(input: &str) -> bool {
        Self::parse(input, &CsvReadOptions::default()).is_ok()
    }
}

/// Turn row 0 into the column labels and drop it from the data
///
/// Header names must end up pairwise distinct; conflicting names are
/// disambiguated first (see [`dedupe_header_names`]).
fn promote_header_row(table: &mut Table) -> CsvResult<()> {
    let names: Vec<String> = table
        .get_row(0)?
        .iter()
        .map(|value| value.to_string())
        .collect();
    let names = dedupe_header_names(&names);

    table.set_column_names(&names)?;
    table.remove_row(0)?;
    Ok(())
}

/// Disambiguate header names so they can serve as unique column labels
///
/// When the list contains no duplicates it is returned as-is. Otherwise a
/// single counter runs over the list: empty names become `(n)` and names
/// that occur more than once get a `(n)` suffix.
fn dedupe_header_names(names: &[String]) -> Vec<String> {
    let has_duplicates = names
        .iter()
        .enumerate()
        .any(|(i, name)| names[..i].contains(name));
    if !has_duplicates {
        return names.to_vec();
    }

    let duplicated: Vec<&String> = names
        .iter()
        .filter(|name| names.iter().filter(|n| n == name).count() > 1)
        .collect();

    let mut n = 0;
    names
        .iter()
        .map(|name| {
            if name.is_empty() {
                n += 1;
                format!("({})", n)
            } else if duplicated.contains(&name) {
                n += 1;
                format!("{}({})", name, n)
            } else {
                name.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::CellValue;

    fn parse(input: &str) -> Table {
        CsvReader::parse(input, &CsvReadOptions::default()).unwrap()
    }

    fn parse_with_header(input: &str) -> Table {
        let options = CsvReadOptions {
            has_header: true,
            ..CsvReadOptions::default()
        };
        CsvReader::parse(input, &options).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let table = parse("a,b,c\nd,e,f");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get_cell(1, 1u32).unwrap(), CellValue::string("e"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("").cell_count(), 0);
        assert_eq!(parse("  \n \r\n").cell_count(), 0);
    }

    #[test]
    fn test_parse_ragged_rows_stay_sparse() {
        let table = parse("a,b,c\nd");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get_cell(1, 0u32).unwrap(), CellValue::string("d"));
        assert_eq!(table.get_cell(1, 1u32).unwrap(), CellValue::Empty);
        assert_eq!(table.get_cell(1, 2u32).unwrap(), CellValue::Empty);
        assert_eq!(table.stored_cell_count(), 4);
    }

    #[test]
    fn test_parse_widening_row_grows_table() {
        let table = parse("a\nb,c,d");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get_cell(0, 2u32).unwrap(), CellValue::Empty);
        assert_eq!(table.get_cell(1, 2u32).unwrap(), CellValue::string("d"));
    }

    #[test]
    fn test_header_row_becomes_labels() {
        let table = parse_with_header("name,age\nalice,30\nbob,25");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["name", "age"]);
        assert_eq!(
            table.get_cell(0, "name").unwrap(),
            CellValue::string("alice")
        );
        assert_eq!(table.get_cell(1, "age").unwrap(), CellValue::string("25"));
    }

    #[test]
    fn test_duplicate_header_names_are_disambiguated() {
        let table = parse_with_header("id,value,value\n1,2,3");

        assert_eq!(
            table.column_names(),
            vec!["id", "value(1)", "value(2)"]
        );
        assert_eq!(
            table.get_cell(0, "value(2)").unwrap(),
            CellValue::string("3")
        );
    }

    #[test]
    fn test_empty_header_names_are_numbered_when_list_has_duplicates() {
        let table = parse_with_header("a,,\n1,2,3");

        assert_eq!(table.column_names(), vec!["a", "(1)", "(2)"]);
    }

    #[test]
    fn test_header_only_input_collapses_to_empty_table() {
        let table = parse_with_header("a,b,c");

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_strict_error_aborts_parse() {
        let options = CsvReadOptions {
            strict: true,
            ..CsvReadOptions::default()
        };
        assert!(CsvReader::parse("ok,\"x\"trailing", &options).is_err());
    }

    #[test]
    fn test_is_csv() {
        assert!(CsvReader::is_csv("a,b\nc,d"));
        assert!(CsvReader::is_csv(""));
    }

    #[test]
    fn test_dedupe_leaves_unique_names_alone() {
        let names = vec!["a".to_string(), "".to_string(), "b".to_string()];
        assert_eq!(dedupe_header_names(&names), names);
    }
}
