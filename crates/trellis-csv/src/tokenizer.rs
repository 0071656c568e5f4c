//! CSV tokenizer
//!
//! A single-pass character scanner that turns raw CSV text into a stream
//! of positioned fields. Quoting follows the usual CSV rules: a quoted
//! field may contain the delimiter, line breaks and doubled quote
//! characters; CR, LF and CRLF are all accepted as line breaks outside
//! quotes.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// One field emitted by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub column: u32,
    /// The field's text, with quoting already resolved
    pub value: String,
}

/// Character-level CSV state machine
///
/// Implements `Iterator`, yielding fields in document order. State is a
/// cursor over the input, the current (row, column) position, the field
/// buffer, and the `inside_quotes` flag; only the delimiter, the quote
/// character, CR and LF ever change state, every other character is
/// appended to the buffer.
///
/// Blank input (empty or whitespace-only) yields no fields at all, so an
/// empty document parses to an empty table rather than one empty cell.
pub struct CsvTokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    quote: char,
    strict: bool,

    row: u32,
    column: u32,
    buffer: String,
    inside_quotes: bool,
    /// Widest row seen so far, as implied by emitted fields
    columns_seen: u32,
    finished: bool,
}

impl<'a> CsvTokenizer<'a> {
    /// Create a tokenizer over `input`
    pub fn new(input: &'a str, options: &CsvReadOptions) -> Self {
        Self {
            chars: input.chars().peekable(),
            delimiter: options.delimiter,
            quote: options.quote,
            strict: options.strict,
            row: 0,
            column: 0,
            buffer: String::new(),
            inside_quotes: false,
            columns_seen: 0,
            finished: input.trim().is_empty(),
        }
    }

    /// Take the buffer as a field at the current position
    fn take_field(&mut self) -> Field {
        let value = std::mem::take(&mut self.buffer);
        let field = Field {
            row: self.row,
            column: self.column,
            value,
        };
        if self.column >= self.columns_seen {
            self.columns_seen = self.column + 1;
        }
        field
    }

    /// Consume everything up to (not including) the next delimiter or
    /// line break, returning what was skipped
    fn skip_to_field_end(&mut self) -> String {
        let mut skipped = String::new();
        while let Some(&c) = self.chars.peek() {
            if c == self.delimiter || c == '\r' || c == '\n' {
                break;
            }
            skipped.push(c);
            self.chars.next();
        }
        skipped
    }

    /// Handle a quote character while inside a quoted field
    ///
    /// A doubled quote is a literal quote; a lone quote closes the field.
    /// Content between a closing quote and the next delimiter/line break
    /// is outside the grammar: tolerant mode discards it with a warning,
    /// strict mode fails the parse.
    fn close_or_escape_quote(&mut self) -> CsvResult<()> {
        if self.chars.peek() == Some(&self.quote) {
            self.chars.next();
            self.buffer.push(self.quote);
            return Ok(());
        }

        self.inside_quotes = false;
        let skipped = self.skip_to_field_end();
        if !skipped.is_empty() {
            if self.strict {
                return Err(CsvError::Malformed {
                    row: self.row,
                    column: self.column,
                    message: format!("unexpected '{}' after closing quote", skipped),
                });
            }
            log::warn!(
                "discarding '{}' after closing quote (row {}, column {})",
                skipped,
                self.row,
                self.column
            );
        }
        Ok(())
    }
}

impl Iterator for CsvTokenizer<'_> {
    type Item = CsvResult<Field>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(c) = self.chars.next() {
            if self.inside_quotes {
                if c == self.quote {
                    if let Err(err) = self.close_or_escape_quote() {
                        self.finished = true;
                        return Some(Err(err));
                    }
                } else {
                    // Delimiters and line breaks are only special outside quotes
                    self.buffer.push(c);
                }
                continue;
            }

            if c == self.quote {
                // An opening quote discards anything buffered before it
                self.inside_quotes = true;
                self.buffer.clear();
                continue;
            }

            if c == self.delimiter {
                let field = self.take_field();
                self.column += 1;
                return Some(Ok(field));
            }

            if c == '\r' || c == '\n' {
                // A CRLF pair is a single line break
                if c == '\r' && self.chars.peek() == Some(&'\n') {
                    self.chars.next();
                }

                if self.column > 0 || !self.buffer.is_empty() {
                    let field = self.take_field();
                    self.row += 1;
                    self.column = 0;
                    return Some(Ok(field));
                }

                // Blank line: nothing started on this row
                continue;
            }

            self.buffer.push(c);
        }

        self.finished = true;

        // A final field remains when the buffer holds data, or when the
        // cursor sits past the last delimiter of a row that is as wide as
        // the widest row so far (a trailing empty field).
        if !self.buffer.is_empty() || self.column >= self.columns_seen {
            return Some(Ok(self.take_field()));
        }

        None
    }
}
