//! National alert classification
//!
//! Each disease's national value is compared against its threshold tiers;
//! the highest tier whose inclusive lower bound is met decides the level.

use crate::config::{AlertThresholds, ExtractionConfig};
use crate::models::{AlertAssessment, Disease, Observation};

/// Classify one disease's national value
#[must_use]
pub fn classify(disease: Disease, value: f64, thresholds: &AlertThresholds) -> AlertAssessment {
    let tier = thresholds.tier_for(value);
    AlertAssessment {
        disease,
        level: tier.level,
        message: tier.message.clone(),
    }
}

/// Produce one assessment per configured disease that has a national observation.
///
/// Diseases without a national observation are skipped, not defaulted.
#[must_use]
pub fn generate_alerts(
    observations: &[Observation],
    config: &ExtractionConfig,
) -> Vec<AlertAssessment> {
    config
        .diseases
        .iter()
        .filter_map(|profile| {
            let national = observations
                .iter()
                .find(|o| o.disease == profile.disease && o.region.is_national())?;
            let assessment = classify(profile.disease, national.value, &profile.thresholds);
            log::debug!(
                "{} national value {} classified as {}",
                profile.disease,
                national.value,
                assessment.level
            );
            Some(assessment)
        })
        .collect()
}
