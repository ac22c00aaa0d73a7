//! The aggregate result handed to rendering consumers

use serde::Serialize;

use crate::models::region::Region;
use crate::models::types::{AlertAssessment, Disease, HistorySeries, Observation, ReportPeriod};

/// Everything extracted from one export snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurveillanceReport {
    /// Reporting week found in the current-period table, if any
    pub period: Option<ReportPeriod>,
    /// Current-period observations across all diseases and regions
    pub observations: Vec<Observation>,
    /// Weekly history series across diseases and regions
    pub history: Vec<HistorySeries>,
    /// At most one assessment per disease
    pub alerts: Vec<AlertAssessment>,
}

impl SurveillanceReport {
    /// The national observation for a disease
    #[must_use]
    pub fn national(&self, disease: Disease) -> Option<&Observation> {
        self.observations
            .iter()
            .find(|o| o.disease == disease && o.region.is_national())
    }

    /// The alert assessment for a disease
    #[must_use]
    pub fn alert_for(&self, disease: Disease) -> Option<&AlertAssessment> {
        self.alerts.iter().find(|a| a.disease == disease)
    }

    /// The history series for a disease in a region
    #[must_use]
    pub fn history_for(&self, disease: Disease, region: &Region) -> Option<&HistorySeries> {
        self.history
            .iter()
            .find(|h| h.disease == disease && h.region == *region)
    }

    /// Observations for a disease, excluding the national aggregate
    pub fn regional(&self, disease: Disease) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(move |o| o.disease == disease && !o.region.is_national())
    }

    /// The `n` named regions with the highest values for a disease.
    ///
    /// Ties keep table order.
    #[must_use]
    pub fn top_regions(&self, disease: Disease, n: usize) -> Vec<&Observation> {
        let mut ranked: Vec<&Observation> = self.regional(disease).collect();
        ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
        ranked.truncate(n);
        ranked
    }
}
