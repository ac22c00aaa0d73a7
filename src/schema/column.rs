//! Column resolution for the multi-disease current table

use crate::reader::CellGrid;

/// Find the per-fixed-point column of a disease in a two-row header.
///
/// The disease-name row is scanned from column 1 (column 0 holds region
/// labels). The first cell containing any synonym anchors the search; the
/// metric row is then scanned rightward from that column for the first cell
/// containing `marker`. Only the first anchor is tried.
///
/// Returns `None` when no anchor exists, no marker follows it, or either
/// header row is missing.
#[must_use]
pub fn locate_disease_column(
    grid: &CellGrid,
    disease_row: usize,
    metric_row: usize,
    synonyms: &[String],
    marker: &str,
) -> Option<usize> {
    let names = grid.row(disease_row)?;
    let metrics = grid.row(metric_row)?;

    let anchor = names
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, cell)| synonyms.iter().any(|s| cell.contains(s.as_str())))
        .map(|(i, _)| i)?;

    metrics
        .iter()
        .enumerate()
        .skip(anchor)
        .find(|(_, cell)| cell.contains(marker))
        .map(|(j, _)| j)
}
