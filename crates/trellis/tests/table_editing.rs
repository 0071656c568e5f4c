//! End-to-end tests for structural table edits and their shift contracts

use pretty_assertions::assert_eq;
use trellis::prelude::*;

fn parse(input: &str) -> Table {
    CsvReader::parse(input, &CsvReadOptions::default()).unwrap()
}

fn serialize(table: &Table) -> String {
    let options = CsvWriteOptions {
        line_terminator: LineTerminator::LF,
        ..CsvWriteOptions::default()
    };
    CsvWriter::to_string(table, &options)
}

/// Spec scenario: insert a labeled column into a 3x3 grid and fill it
#[test]
fn test_insertion_shift_correctness() {
    let mut table = parse("1,2,3\n4,5,6\n7,8,9");

    table.add_columns_with_labels(1, &["x"], Some(1)).unwrap();
    table
        .set_column(
            "x",
            &["a".into(), "b".into(), "c".into()],
        )
        .unwrap();

    assert_eq!(serialize(&table), "1,a,2,3\n4,b,5,6\n7,c,8,9");
    // Original column 1 moved intact to column 2
    assert_eq!(
        table.get_column(2u32).unwrap(),
        vec![
            CellValue::string("2"),
            CellValue::string("5"),
            CellValue::string("8"),
        ]
    );
}

/// Removing a column then inserting an empty one at the same index
/// restores the shape and leaves every other column untouched
#[test]
fn test_removal_inverse() {
    let original = parse("1,2,3\n4,5,6\n7,8,9");

    for k in 0..3u32 {
        let mut table = original.clone();
        table.remove_column(k).unwrap();
        table.add_columns(1, if k < 2 { Some(k) } else { None }).unwrap();

        assert_eq!(table.column_count(), original.column_count());
        for col in 0..3u32 {
            if col == k {
                assert_eq!(
                    table.get_column(col).unwrap(),
                    vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
                    "inserted column {} should be empty",
                    k
                );
            } else {
                assert_eq!(
                    table.get_column(col).unwrap(),
                    original.get_column(col).unwrap(),
                    "column {} changed after remove/insert at {}",
                    col,
                    k
                );
            }
        }
    }
}

/// Wide multi-column insert at position 0 must not lose or duplicate data
#[test]
fn test_insert_many_at_front_preserves_all_cells() {
    let mut table = parse("a,b,c,d,e");

    table.add_columns(3, Some(0)).unwrap();

    assert_eq!(serialize(&table), ",,,a,b,c,d,e");
    assert_eq!(table.stored_cell_count(), 5);
}

/// Row insertion in the middle shifts rows down without collisions
#[test]
fn test_row_insertion_shift() {
    let mut table = parse("top\nmiddle\nbottom");

    table.add_rows(2, Some(1)).unwrap();

    assert_eq!(serialize(&table), "top\n\n\nmiddle\nbottom");
    assert_eq!(table.row_count(), 5);
    assert_eq!(table.stored_cell_count(), 3);
}

/// Labels stay attached to their columns across edits on either side
#[test]
fn test_labels_follow_their_columns() {
    let options = CsvReadOptions {
        has_header: true,
        ..CsvReadOptions::default()
    };
    let mut table = CsvReader::parse("id,name,score\n1,alice,10\n2,bob,20", &options).unwrap();

    table.add_columns_with_labels(1, &["city"], Some(1)).unwrap();
    assert_eq!(table.column_names(), vec!["id", "city", "name", "score"]);
    assert_eq!(
        table.get_cell(1, "score").unwrap(),
        CellValue::string("20")
    );

    table.remove_column("id").unwrap();
    assert_eq!(table.column_names(), vec!["city", "name", "score"]);
    assert_eq!(
        table.get_cell(0, "name").unwrap(),
        CellValue::string("alice")
    );
}

/// Assigning a label already used by another column fails and changes nothing
#[test]
fn test_label_uniqueness_invariant() {
    let mut table = parse("1,2\n3,4");
    table.set_column_name(0u32, "dup").unwrap();

    let err = table.set_column_name(1u32, "dup").unwrap_err();
    assert_eq!(err, Error::DuplicateLabel("dup".to_string()));
    assert_eq!(table.column_name(1).unwrap(), "");
    assert_eq!(table.column_index("dup").unwrap(), 0);
}

/// A failed structural edit leaves the table exactly as it was
#[test]
fn test_failed_edits_are_all_or_nothing() {
    let pristine = parse("1,2,3\n4,5,6");

    let mut table = pristine.clone();
    assert!(table.add_columns(0, None).is_err());
    assert!(table.add_columns(1, Some(9)).is_err());
    assert!(table.add_columns_with_labels(2, &["a"], None).is_err());
    assert!(table.set_row(0, &["too".into(), "short".into()]).is_err());
    assert!(table.set_cell(0, "nope", "x").is_err());

    assert_eq!(table, pristine);
}

/// Deleting the last column (or row) collapses the table to 0x0
#[test]
fn test_joint_dimension_invariant_on_removal() {
    let mut table = parse("a\nb");
    table.remove_column(0u32).unwrap();
    assert_eq!((table.row_count(), table.column_count()), (0, 0));

    let mut table = parse("a,b");
    table.remove_row(0).unwrap();
    assert_eq!((table.row_count(), table.column_count()), (0, 0));
}
