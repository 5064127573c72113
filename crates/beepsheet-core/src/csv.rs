//! Minimal CSV reader for beep sheets.
//!
//! Parses a header row plus data rows into a [`CsvTable`]. Quoting follows
//! RFC 4180: fields containing commas, quotes, or newlines are wrapped in
//! double quotes, with embedded quotes doubled. Blank lines are skipped and
//! do not advance the logical row count.
//!
//! Row numbers are 1-based counting the header as row 1, so the first data
//! row is row 2. Validation errors report these numbers, which is why the
//! reader (not the validator) assigns them.

use thiserror::Error;

/// Errors produced while reading CSV text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    /// A quoted field was opened but never closed before end of input.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote {
        /// 1-based physical line where the quoted field started.
        line: usize,
    },

    /// The input contained no header row.
    #[error("input contains no header row")]
    MissingHeader,
}

/// A parsed CSV document: one header row plus zero or more data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parses CSV text into a table.
    ///
    /// The first non-blank record is taken as the header. Data rows shorter
    /// than the header are padded with empty fields on lookup; extra cells
    /// beyond the header are ignored.
    pub fn parse(input: &str) -> Result<Self, CsvError> {
        let mut records = parse_records(input)?;
        if records.is_empty() {
            return Err(CsvError::MissingHeader);
        }
        let headers = records.remove(0);
        Ok(Self { headers, records })
    }

    /// Returns the header column names in declaration order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns true if the header names a column exactly matching `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Number of data rows (excluding the header).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over data rows in input order, with their 1-based row
    /// numbers (header = row 1, so the first yielded row is number 2).
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.records.iter().enumerate().map(|(i, cells)| RawRow {
            headers: &self.headers,
            cells,
            number: i + 2,
        })
    }
}

/// One data row, viewed as an ordered mapping from column name to value.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    headers: &'a [String],
    cells: &'a [String],
    number: usize,
}

impl<'a> RawRow<'a> {
    /// 1-based row number within the source file (header = 1).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Looks up a field by column name.
    ///
    /// Returns `None` only when the header has no such column. A row with
    /// fewer cells than the header yields `""` for the missing positions.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        Some(self.cells.get(idx).map(String::as_str).unwrap_or(""))
    }
}

/// Splits raw CSV text into records of fields, skipping blank lines.
fn parse_records(input: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut line = 1usize;
    let mut quote_start_line = 1usize;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() && !field_was_quoted => {
                in_quotes = true;
                field_was_quoted = true;
                quote_start_line = line;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_was_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {
                // consumed together with the following '\n'
            }
            '\n' => {
                line += 1;
                record.push(std::mem::take(&mut field));
                field_was_quoted = false;
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote {
            line: quote_start_line,
        });
    }

    // Final record when the input does not end with a newline
    if !field.is_empty() || !record.is_empty() || field_was_quoted {
        record.push(field);
        push_record(&mut records, record);
    }

    Ok(records)
}

/// Appends a record unless it is a blank line (single empty field).
fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    if record.len() == 1 && record[0].is_empty() {
        return;
    }
    records.push(record);
}
