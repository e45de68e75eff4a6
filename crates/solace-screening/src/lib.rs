//! solace-screening
//!
//! Mental-health screening instrument definitions and scoring. Pure data
//! and pure functions — no I/O, no shared mutable state. Defines the
//! questions, answer scales, and severity bands for each supported
//! instrument, and computes `{total, severity, percentage}` results.

pub mod catalog;
pub mod error;
pub mod instruments;
pub mod scoring;

pub use catalog::{Catalog, Instrument};
pub use error::ScreeningError;
pub use scoring::calculate_score;
