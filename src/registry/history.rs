//! Historical series extraction
//!
//! Sections are located by keyword, then read with a fixed layout relative
//! to the section start: week header at +1, metric header at +2, data from +3.

use regex::Regex;

use crate::config::ExtractionConfig;
use crate::models::{Disease, HistorySeries, Region, WeekValue};
use crate::reader::CellGrid;
use crate::schema::{WeekColumn, locate_sections, resolve_week_columns, week_header_pattern};
use crate::utils::parse_optional_cell;

const WEEK_HEADER_OFFSET: usize = 1;
const METRIC_HEADER_OFFSET: usize = 2;
const DATA_OFFSET: usize = 3;

/// Extract history series for every disease with a section in the table.
///
/// Output is grouped by disease in configuration order.
#[must_use]
pub fn extract_history(grid: &CellGrid, config: &ExtractionConfig) -> Vec<HistorySeries> {
    let week_pattern = match week_header_pattern(&config.week_marker) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Skipping history: {e}");
            return Vec::new();
        }
    };
    let starts = locate_sections(grid, config);
    log::debug!("History section starts: {starts:?}");

    let mut series = Vec::new();
    for profile in &config.diseases {
        match starts.get(&profile.disease) {
            Some(&start) => series.extend(read_section(
                grid,
                start,
                profile.disease,
                config,
                &week_pattern,
            )),
            None if !profile.section_keywords.is_empty() => {
                log::warn!("No history section found for {}", profile.disease);
            }
            None => {}
        }
    }
    series
}

/// Extract the series of one section starting at row `start`.
///
/// Reading stops at the first row with an empty region label, or at a row
/// whose label contains any section keyword; neither row is emitted.
#[must_use]
pub fn extract_section(
    grid: &CellGrid,
    start: usize,
    disease: Disease,
    config: &ExtractionConfig,
) -> Vec<HistorySeries> {
    match week_header_pattern(&config.week_marker) {
        Ok(pattern) => read_section(grid, start, disease, config, &pattern),
        Err(e) => {
            log::warn!("Skipping {disease} history section: {e}");
            Vec::new()
        }
    }
}

fn read_section(
    grid: &CellGrid,
    start: usize,
    disease: Disease,
    config: &ExtractionConfig,
    week_pattern: &Regex,
) -> Vec<HistorySeries> {
    let (Some(week_row), Some(metric_row)) = (
        grid.row(start + WEEK_HEADER_OFFSET),
        grid.row(start + METRIC_HEADER_OFFSET),
    ) else {
        log::warn!("{disease} history section at row {start} is missing its header rows");
        return Vec::new();
    };

    let columns = resolve_week_columns(
        week_row,
        metric_row,
        week_pattern,
        &config.per_point_marker,
    );
    if columns.is_empty() {
        log::warn!("{disease} history section at row {start} has no week columns");
    }

    let mut series = Vec::new();
    for row in grid.rows().skip(start + DATA_OFFSET) {
        let label = row.first().map_or("", |c| c.trim());
        if label.is_empty() {
            break;
        }
        if config.all_section_keywords().any(|k| label.contains(k)) {
            break;
        }

        series.push(HistorySeries {
            disease,
            region: Region::from_label(label, &config.aggregate_labels),
            history: read_weeks(row, &columns),
        });
    }
    series
}

fn read_weeks(row: &[String], columns: &[WeekColumn]) -> Vec<WeekValue> {
    columns
        .iter()
        .map(|wc| WeekValue {
            week: wc.week,
            value: parse_optional_cell(row.get(wc.column).map(String::as_str)),
        })
        .collect()
}
