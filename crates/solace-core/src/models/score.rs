use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Named severity tier for a screening total.
///
/// Ordered from least to most severe; the derived `Ord` follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SeverityLevel {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityLevel {
    /// The wire label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Minimal => "minimal",
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::ModeratelySevere => "moderately-severe",
            SeverityLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The computed outcome of scoring one completed screening.
///
/// `percentage` is `total / max_score` rounded to the nearest integer
/// and deliberately unclamped: a caller that feeds in answers above the
/// instrument's scale gets a percentage above 100 rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total: i64,
    pub severity: SeverityLevel,
    pub percentage: i64,
}
