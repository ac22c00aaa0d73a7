//! Configuration for surveillance extraction.
//!
//! All header markers, row offsets and alert thresholds live here so the
//! extractors stay table-driven.

use std::path::PathBuf;

use crate::error::{Result, SentinelError};
use crate::models::{AlertLevel, Disease};
use crate::registry::SourceKind;

/// One tier of an alert threshold table
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTier {
    /// Inclusive lower bound of the tier
    pub lower_bound: f64,
    pub level: AlertLevel,
    pub message: String,
}

impl ThresholdTier {
    #[must_use]
    pub fn new(lower_bound: f64, level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            lower_bound,
            level,
            message: message.into(),
        }
    }
}

/// Ordered threshold tiers for one disease, lowest bound first
#[derive(Debug, Clone, PartialEq)]
pub struct AlertThresholds {
    tiers: Vec<ThresholdTier>,
}

impl AlertThresholds {
    /// Build a threshold table.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when the table is empty, a bound is not finite,
    /// or bounds are not strictly ascending.
    pub fn new(tiers: Vec<ThresholdTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(SentinelError::InvalidConfig(
                "threshold table has no tiers".to_string(),
            ));
        }
        if let Some(tier) = tiers.iter().find(|t| !t.lower_bound.is_finite()) {
            return Err(SentinelError::InvalidConfig(format!(
                "threshold bound {} is not finite",
                tier.lower_bound
            )));
        }
        if tiers
            .windows(2)
            .any(|pair| pair[0].lower_bound >= pair[1].lower_bound)
        {
            return Err(SentinelError::InvalidConfig(
                "threshold bounds must be strictly ascending".to_string(),
            ));
        }
        Ok(Self { tiers })
    }

    /// Tiers in ascending bound order
    #[must_use]
    pub fn tiers(&self) -> &[ThresholdTier] {
        &self.tiers
    }

    /// The highest tier whose bound the value meets.
    ///
    /// Values below every bound fall into the lowest tier.
    #[must_use]
    pub fn tier_for(&self, value: f64) -> &ThresholdTier {
        self.tiers
            .iter()
            .rev()
            .find(|t| value >= t.lower_bound)
            .unwrap_or(&self.tiers[0])
    }

    /// Severity of an arbitrary value, such as one week of a history series
    #[must_use]
    pub fn classify_value(&self, value: f64) -> AlertLevel {
        self.tier_for(value).level
    }
}

/// Matching vocabulary and thresholds for one disease
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    pub disease: Disease,
    /// Export holding the disease's current-period values
    pub current_source: SourceKind,
    /// Substrings identifying the disease in a current-table header row
    pub header_synonyms: Vec<String>,
    /// Substrings marking the start of the disease's history section
    pub section_keywords: Vec<String>,
    /// Tiers for the national current value
    pub thresholds: AlertThresholds,
    /// Tiers for weekly history points; `None` leaves points unclassified
    pub history_thresholds: Option<AlertThresholds>,
}

impl DiseaseProfile {
    /// Severity of one weekly history point, if the disease has history tiers
    #[must_use]
    pub fn history_level(&self, value: f64) -> Option<AlertLevel> {
        self.history_thresholds
            .as_ref()
            .map(|t| t.classify_value(value))
    }
}

/// Configuration for extracting a snapshot
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Field delimiter of the delimited text
    pub delimiter: char,
    /// Quote character of the delimited text
    pub quote: char,
    /// Row holding disease names in the multi-disease current table
    pub disease_header_row: usize,
    /// Row holding sub-metric names in the multi-disease current table
    pub metric_header_row: usize,
    /// First data row of both current tables
    pub data_start_row: usize,
    /// Current tables with fewer rows yield nothing
    pub min_current_rows: usize,
    /// Value column of the single-metric table
    pub single_metric_value_column: usize,
    /// Marker of the per-fixed-point sub-metric
    pub per_point_marker: String,
    /// Labels that denote the national total
    pub aggregate_labels: Vec<String>,
    /// Token following a week number in history headers
    pub week_marker: String,
    /// Number of leading cells searched for a section keyword
    pub section_label_width: usize,
    /// Per-disease vocabulary and thresholds, in report order
    pub diseases: Vec<DiseaseProfile>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            disease_header_row: 2,
            metric_header_row: 3,
            data_start_row: 4,
            min_current_rows: 5,
            single_metric_value_column: 2,
            per_point_marker: "定当".to_string(),
            aggregate_labels: vec!["総数".to_string(), "全国".to_string()],
            week_marker: "週".to_string(),
            section_label_width: 5,
            diseases: default_profiles(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn tiers(warning: f64, alert: f64, messages: [&str; 3]) -> AlertThresholds {
    AlertThresholds {
        tiers: vec![
            ThresholdTier::new(0.0, AlertLevel::Normal, messages[0]),
            ThresholdTier::new(warning, AlertLevel::Warning, messages[1]),
            ThresholdTier::new(alert, AlertLevel::Alert, messages[2]),
        ],
    }
}

fn history_tiers(warning: f64, alert: f64) -> Option<AlertThresholds> {
    Some(tiers(warning, alert, ["平常", "注意報", "警報"]))
}

fn default_profiles() -> Vec<DiseaseProfile> {
    vec![
        DiseaseProfile {
            disease: Disease::Influenza,
            current_source: SourceKind::Teiten,
            header_synonyms: strings(&["Influenza", "インフルエンザ"]),
            section_keywords: strings(&["インフルエンザ"]),
            thresholds: tiers(
                1.0,
                10.0,
                [
                    "全国的に平常レベルです。",
                    "全国的に流行入りしています。",
                    "全国的に警報レベルです。",
                ],
            ),
            history_thresholds: history_tiers(10.0, 30.0),
        },
        DiseaseProfile {
            disease: Disease::Covid19,
            current_source: SourceKind::Teiten,
            header_synonyms: strings(&["COVID-19", "新型コロナウイルス感染症"]),
            section_keywords: strings(&["COVID-19", "新型コロナ"]),
            thresholds: tiers(
                5.0,
                10.0,
                ["全国的に平常レベルです。", "注意が必要です。", "高い感染レベルです。"],
            ),
            history_thresholds: history_tiers(10.0, 15.0),
        },
        DiseaseProfile {
            disease: Disease::AriSyndrome,
            current_source: SourceKind::Ari,
            header_synonyms: strings(&["ARI", "急性呼吸器感染症"]),
            section_keywords: Vec::new(),
            thresholds: tiers(
                80.0,
                120.0,
                ["全国的に平常レベルです。", "注意が必要です。", "流行レベルです。"],
            ),
            history_thresholds: None,
        },
    ]
}

impl ExtractionConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile of a disease, if configured
    #[must_use]
    pub fn profile(&self, disease: Disease) -> Option<&DiseaseProfile> {
        self.diseases.iter().find(|p| p.disease == disease)
    }

    /// Replace the threshold table of a disease
    #[must_use]
    pub fn with_thresholds(mut self, disease: Disease, thresholds: AlertThresholds) -> Self {
        if let Some(profile) = self.diseases.iter_mut().find(|p| p.disease == disease) {
            profile.thresholds = thresholds;
        }
        self
    }

    /// Replace the history-point threshold table of a disease
    #[must_use]
    pub fn with_history_thresholds(
        mut self,
        disease: Disease,
        thresholds: Option<AlertThresholds>,
    ) -> Self {
        if let Some(profile) = self.diseases.iter_mut().find(|p| p.disease == disease) {
            profile.history_thresholds = thresholds;
        }
        self
    }

    /// Severity of a weekly history point of `disease`.
    ///
    /// `None` when the disease is not configured or has no history tiers.
    #[must_use]
    pub fn history_level(&self, disease: Disease, value: f64) -> Option<AlertLevel> {
        self.profile(disease)?.history_level(value)
    }

    /// Replace the section keywords of a disease
    #[must_use]
    pub fn with_section_keywords(mut self, disease: Disease, keywords: &[&str]) -> Self {
        if let Some(profile) = self.diseases.iter_mut().find(|p| p.disease == disease) {
            profile.section_keywords = strings(keywords);
        }
        self
    }

    /// Set the field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Every configured section keyword across all diseases
    pub fn all_section_keywords(&self) -> impl Iterator<Item = &str> {
        self.diseases
            .iter()
            .flat_map(|p| p.section_keywords.iter().map(String::as_str))
    }
}

/// File names of the three sources inside a snapshot directory
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_dir: PathBuf,
    pub teiten_file: String,
    pub ari_file: String,
    pub tougai_file: String,
}

impl SourceConfig {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            teiten_file: "teiten.csv".to_string(),
            ari_file: "ari.csv".to_string(),
            tougai_file: "tougai.csv".to_string(),
        }
    }

    /// Path of a source inside the snapshot directory
    #[must_use]
    pub fn path_for(&self, kind: SourceKind) -> PathBuf {
        let file = match kind {
            SourceKind::Teiten => &self.teiten_file,
            SourceKind::Ari => &self.ari_file,
            SourceKind::Tougai => &self.tougai_file,
        };
        self.base_dir.join(file)
    }

    /// Override the file name of a source
    #[must_use]
    pub fn with_file(mut self, kind: SourceKind, file: impl Into<String>) -> Self {
        let file = file.into();
        match kind {
            SourceKind::Teiten => self.teiten_file = file,
            SourceKind::Ari => self.ari_file = file,
            SourceKind::Tougai => self.tougai_file = file,
        }
        self
    }
}
