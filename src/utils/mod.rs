//! Small text helpers shared by the extractors

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("leading number pattern is valid");
}

/// Remove every whitespace character from a label
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a numeric cell, falling back to zero.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5 "` and `"12.5*"` both read as 12.5. Cells with no numeric prefix
/// read as 0. Negative values pass through unchanged.
#[must_use]
pub fn parse_cell_value(cell: &str) -> f64 {
    LEADING_NUMBER
        .find(cell.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse an optional cell; absent cells read as 0
#[must_use]
pub fn parse_optional_cell(cell: Option<&str>) -> f64 {
    cell.map_or(0.0, parse_cell_value)
}
