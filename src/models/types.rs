//! Core record types produced by the extractors

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::models::region::Region;

/// Diseases tracked by the sentinel exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Disease {
    /// Seasonal influenza
    #[serde(rename = "Influenza")]
    Influenza,
    /// COVID-19
    #[serde(rename = "COVID-19")]
    Covid19,
    /// Acute respiratory infection (ARI) syndrome
    #[serde(rename = "ARI")]
    AriSyndrome,
}

impl Disease {
    /// All diseases in report order
    pub const ALL: [Self; 3] = [Self::Influenza, Self::Covid19, Self::AriSyndrome];

    /// Key identifying the disease in the exports and downstream consumers
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Influenza => "Influenza",
            Self::Covid19 => "COVID-19",
            Self::AriSyndrome => "ARI",
        }
    }

    /// Native display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Influenza => "インフルエンザ",
            Self::Covid19 => "COVID-19",
            Self::AriSyndrome => "急性呼吸器感染症",
        }
    }

    /// Look a disease up by its key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A current-period value for one disease in one region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub disease: Disease,
    pub region: Region,
    pub value: f64,
}

/// A single week of a history series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekValue {
    /// 1-based week number taken from the header text
    pub week: u32,
    pub value: f64,
}

/// Weekly history for one disease in one region.
///
/// Points follow the column order of the section header, which is not
/// necessarily ascending by week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySeries {
    pub disease: Disease,
    pub region: Region,
    pub history: Vec<WeekValue>,
}

impl HistorySeries {
    /// Week numbers in series order
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.history.iter().map(|p| p.week)
    }
}

/// Severity levels for a national alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Alert,
}

impl AlertLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert classification of one disease's national value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertAssessment {
    pub disease: Disease,
    pub level: AlertLevel,
    pub message: String,
}

/// Reporting year and epidemiological week of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub year: i32,
    pub week: u32,
}

impl ReportPeriod {
    /// Monday of the reporting week, when the week exists in that year
    #[must_use]
    pub fn week_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }
}
