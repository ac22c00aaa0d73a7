//! Current-period extraction
//!
//! Two table shapes carry current values: the multi-disease table, whose
//! value column is found from its header, and the single-metric syndrome
//! table, whose value column is fixed.

use crate::config::ExtractionConfig;
use crate::models::{Disease, Observation, Region};
use crate::reader::CellGrid;
use crate::schema::locate_disease_column;
use crate::utils::parse_cell_value;

/// Extract one disease from the multi-disease current table.
///
/// Returns an empty list when the table is too short or the disease's
/// per-fixed-point column cannot be located.
#[must_use]
pub fn extract_multi_disease(
    grid: &CellGrid,
    disease: Disease,
    config: &ExtractionConfig,
) -> Vec<Observation> {
    if grid.len() < config.min_current_rows {
        log::warn!("Current table has {} rows, skipping {disease}", grid.len());
        return Vec::new();
    }
    let Some(profile) = config.profile(disease) else {
        log::warn!("No profile configured for {disease}");
        return Vec::new();
    };

    let Some(column) = locate_disease_column(
        grid,
        config.disease_header_row,
        config.metric_header_row,
        &profile.header_synonyms,
        &config.per_point_marker,
    ) else {
        log::warn!("{disease} column not found in current table");
        return Vec::new();
    };

    log::debug!("{disease} per-point values in column {column}");
    extract_column(grid, disease, column, config)
}

/// Extract the single-metric syndrome table from its fixed value column
#[must_use]
pub fn extract_single_metric(
    grid: &CellGrid,
    disease: Disease,
    config: &ExtractionConfig,
) -> Vec<Observation> {
    if grid.len() < config.min_current_rows {
        log::warn!("Single-metric table has {} rows, skipping {disease}", grid.len());
        return Vec::new();
    }
    extract_column(grid, disease, config.single_metric_value_column, config)
}

/// Read `column` of every data row, keeping rows with a recognised region label
fn extract_column(
    grid: &CellGrid,
    disease: Disease,
    column: usize,
    config: &ExtractionConfig,
) -> Vec<Observation> {
    grid.rows()
        .skip(config.data_start_row)
        .filter_map(|row| {
            let label = row.first().map_or("", String::as_str);
            let Some(raw) = row.get(column) else {
                log::debug!("Skipping short row {label:?} for {disease}: no column {column}");
                return None;
            };
            let Some(region) = Region::resolve(label, &config.aggregate_labels) else {
                log::debug!("Dropping unrecognised label {label:?} for {disease}");
                return None;
            };
            Some(Observation {
                disease,
                region,
                value: parse_cell_value(raw),
            })
        })
        .collect()
}
