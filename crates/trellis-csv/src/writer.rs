//! CSV writer
//!
//! Serializes a [`Table`] back into CSV text, quoting exactly the fields
//! that need it.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use trellis_core::Table;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;

/// CSV writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        writer.write_all(Self::to_string(table, options).as_bytes())?;
        Ok(())
    }

    /// Render a table as CSV text
    ///
    /// Rows are joined (not terminated) by the configured line
    /// terminator, so the output carries no trailing newline. Every cell
    /// in `rows x columns` is rendered; unassigned cells become empty
    /// fields.
    pub fn to_string(table: &Table, options: &CsvWriteOptions) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(table.row_count() as usize + 1);

        if options.write_header {
            lines.push(render_record(
                table.column_names().iter().map(String::as_str),
                options,
            ));
        }

        for row in 0..table.row_count() {
            let values = table.get_row(row).unwrap_or_default();
            let fields: Vec<String> = values.iter().map(|value| value.to_string()).collect();
            lines.push(render_record(fields.iter().map(String::as_str), options));
        }

        lines.join(options.line_terminator.as_str())
    }
}

/// Join one record's fields with the delimiter, escaping as needed
fn render_record<'a, I: Iterator<Item = &'a str>>(fields: I, options: &CsvWriteOptions) -> String {
    fields
        .map(|field| escape_field(field, options.delimiter, options.quote))
        .collect::<Vec<_>>()
        .join(&options.delimiter.to_string())
}

/// Quote a field when it contains the delimiter, the quote character or a
/// line break, doubling every internal quote character
fn escape_field(field: &str, delimiter: char, quote: char) -> String {
    if field.contains(delimiter) || field.contains(quote) || field.contains('\r') || field.contains('\n')
    {
        let mut doubled_quote = String::with_capacity(2);
        doubled_quote.push(quote);
        doubled_quote.push(quote);

        let mut escaped = String::with_capacity(field.len() + 2);
        escaped.push(quote);
        escaped.push_str(&field.replace(quote, &doubled_quote));
        escaped.push(quote);
        escaped
    } else {
        field.to_string()
    }
}
