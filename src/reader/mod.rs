//! Tokenizer turning delimited export text into a grid of cells.
//!
//! The exports are not strict CSV: rows are ragged and quoting may be broken.
//! Parsing never fails; malformed quoting degrades to best-effort splitting.

use serde::Serialize;

/// Ordered rows of string cells. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CellGrid {
    rows: Vec<Vec<String>>,
}

impl CellGrid {
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from string slices
    #[must_use]
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell text, or `None` when the row or column is out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// Tokenize delimited text into a cell grid.
///
/// A leading byte-order mark is dropped. Lines are split on LF or CRLF,
/// trimmed, and dropped when blank. Inside a
/// line, `quote` toggles quoted state and a doubled quote inside a quoted
/// field yields a literal quote. Quotes never span lines.
#[must_use]
pub fn parse_delimited(text: &str, delimiter: char, quote: char) -> CellGrid {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let rows = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| split_line(line, delimiter, quote))
        .collect();
    CellGrid::new(rows)
}

fn split_line(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote {
            if in_quote && chars.peek() == Some(&quote) {
                current.push(quote);
                chars.next();
            } else {
                in_quote = !in_quote;
            }
        } else if c == delimiter && !in_quote {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}
