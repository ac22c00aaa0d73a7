//! Section and week-column resolution for the historical table.
//!
//! The historical table stacks one section per disease. A section starts at
//! a row whose leading cells mention the disease, followed by a week header
//! row and a sub-metric header row.

use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::config::ExtractionConfig;
use crate::error::{Result, SentinelError};
use crate::models::Disease;
use crate::reader::CellGrid;

/// A week resolved to the column holding its per-fixed-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekColumn {
    pub week: u32,
    pub column: usize,
}

/// Find the start row of each disease's section.
///
/// Each row's first `section_label_width` cells are joined with a space and
/// searched for the disease's section keywords. When a keyword occurs in
/// several rows the last one wins. Diseases without a match are absent
/// from the map.
#[must_use]
pub fn locate_sections(grid: &CellGrid, config: &ExtractionConfig) -> FxHashMap<Disease, usize> {
    let mut starts = FxHashMap::default();

    for (index, row) in grid.rows().enumerate() {
        let label = row.iter().take(config.section_label_width).join(" ");
        for profile in &config.diseases {
            if profile
                .section_keywords
                .iter()
                .any(|k| label.contains(k.as_str()))
            {
                starts.insert(profile.disease, index);
            }
        }
    }

    starts
}

/// Compile the week header pattern: a 1–2 digit number directly followed by
/// `week_marker`.
///
/// # Errors
/// Returns `InvalidConfig` when the marker yields an unusable pattern.
pub fn week_header_pattern(week_marker: &str) -> Result<Regex> {
    Regex::new(&format!("([0-9]{{1,2}}){}", regex::escape(week_marker)))
        .map_err(|e| SentinelError::InvalidConfig(format!("week marker {week_marker:?}: {e}")))
}

/// Resolve the week columns of a section from its two header rows.
///
/// A week header cell contributes when `week_pattern` (see
/// [`week_header_pattern`]) matches it. Its value column is the same column of the
/// metric row when that cell carries `marker`, otherwise the next column when
/// that one does; weeks with neither are left out. Order follows the header.
#[must_use]
pub fn resolve_week_columns(
    week_row: &[String],
    metric_row: &[String],
    week_pattern: &Regex,
    marker: &str,
) -> Vec<WeekColumn> {
    let has_marker = |col: usize| metric_row.get(col).is_some_and(|c| c.contains(marker));

    week_row
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| {
            let week = week_pattern.captures(cell)?.get(1)?.as_str().parse::<u32>().ok()?;
            let column = if has_marker(i) {
                i
            } else if has_marker(i + 1) {
                i + 1
            } else {
                log::debug!("Week {week} at column {i} has no per-point column");
                return None;
            };
            Some(WeekColumn { week, column })
        })
        .collect()
}
