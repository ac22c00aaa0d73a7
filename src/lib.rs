//! A Rust library for extracting typed surveillance data from weekly
//! sentinel-site exports: current per-region values, weekly history series
//! and national alert levels.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod registry;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{AlertThresholds, DiseaseProfile, ExtractionConfig, SourceConfig, ThresholdTier};
pub use error::{Result, SentinelError};
pub use models::{
    AlertAssessment, AlertLevel, Disease, HistorySeries, Observation, Region, ReportPeriod,
    SurveillanceReport, WeekValue,
};
pub use reader::{CellGrid, parse_delimited};
pub use registry::SourceKind;

// Pipeline entry points
pub use async_io::{
    DirectorySourceLoader, InMemorySourceLoader, RawSnapshot, SourceLoader, load_snapshot,
};
pub use pipeline::{SnapshotGrids, process_grids, process_snapshot};
