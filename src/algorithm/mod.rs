//! Derived indicators computed from extracted observations

pub mod alerts;

pub use alerts::{classify, generate_alerts};
