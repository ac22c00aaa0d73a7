//! One-shot transformation of a snapshot into a surveillance report

use lazy_static::lazy_static;
use regex::Regex;

use crate::algorithm::generate_alerts;
use crate::async_io::RawSnapshot;
use crate::config::ExtractionConfig;
use crate::models::{Observation, ReportPeriod, SurveillanceReport};
use crate::reader::{CellGrid, parse_delimited};
use crate::registry::{SourceKind, extract_history, extract_multi_disease, extract_single_metric};

lazy_static! {
    static ref REPORT_PERIOD: Regex =
        Regex::new(r"([0-9]{4})年([0-9]{1,2})週").expect("report period pattern is valid");
}

/// Tokenized exports of one snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotGrids {
    pub teiten: CellGrid,
    pub ari: CellGrid,
    pub tougai: CellGrid,
}

impl SnapshotGrids {
    /// Tokenize the three raw exports
    #[must_use]
    pub fn parse(snapshot: &RawSnapshot, config: &ExtractionConfig) -> Self {
        let parse = |text: &str| parse_delimited(text, config.delimiter, config.quote);
        Self {
            teiten: parse(&snapshot.teiten),
            ari: parse(&snapshot.ari),
            tougai: parse(&snapshot.tougai),
        }
    }
}

/// First `<year>年<week>週` occurrence in an export's text
#[must_use]
pub fn find_report_period(text: &str) -> Option<ReportPeriod> {
    let caps = REPORT_PERIOD.captures(text)?;
    Some(ReportPeriod {
        year: caps.get(1)?.as_str().parse().ok()?,
        week: caps.get(2)?.as_str().parse().ok()?,
    })
}

/// Extract current-period observations for every configured disease
#[must_use]
pub fn extract_observations(grids: &SnapshotGrids, config: &ExtractionConfig) -> Vec<Observation> {
    let mut observations = Vec::new();
    for profile in &config.diseases {
        let extracted = match profile.current_source {
            SourceKind::Teiten => extract_multi_disease(&grids.teiten, profile.disease, config),
            SourceKind::Ari => extract_single_metric(&grids.ari, profile.disease, config),
            SourceKind::Tougai => {
                log::warn!("{} has no current-period table configured", profile.disease);
                Vec::new()
            }
        };
        log::debug!("{}: {} observations", profile.disease, extracted.len());
        observations.extend(extracted);
    }
    observations
}

/// Run the full extraction on tokenized exports
#[must_use]
pub fn process_grids(grids: &SnapshotGrids, config: &ExtractionConfig) -> SurveillanceReport {
    let observations = extract_observations(grids, config);
    let history = extract_history(&grids.tougai, config);
    let alerts = generate_alerts(&observations, config);

    SurveillanceReport {
        period: None,
        observations,
        history,
        alerts,
    }
}

/// Run the full extraction on a raw snapshot
#[must_use]
pub fn process_snapshot(snapshot: &RawSnapshot, config: &ExtractionConfig) -> SurveillanceReport {
    let grids = SnapshotGrids::parse(snapshot, config);
    let mut report = process_grids(&grids, config);
    report.period = find_report_period(&snapshot.teiten);

    log::info!(
        "Extracted {} observations, {} history series, {} alerts",
        report.observations.len(),
        report.history.len(),
        report.alerts.len()
    );
    report
}
