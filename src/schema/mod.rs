//! Header resolution for exports without a fixed schema.
//!
//! Both resolvers work in two phases: find anchor text, then search a
//! bounded neighbourhood for the dependent column.

pub mod column;
pub mod section;

pub use column::locate_disease_column;
pub use section::{WeekColumn, locate_sections, resolve_week_columns, week_header_pattern};
