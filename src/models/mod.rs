//! Domain models for surveillance data
//!
//! Regions, observations, history series and alert assessments, plus the
//! report that bundles them.

pub mod region;
pub mod report;
pub mod types;

pub use region::{NATIONAL_LABEL, PREFECTURES, Region};
pub use report::SurveillanceReport;
pub use types::{
    AlertAssessment, AlertLevel, Disease, HistorySeries, Observation, ReportPeriod, WeekValue,
};
