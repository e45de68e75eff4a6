use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::SeverityLevel;

/// One question of a screening instrument. `id` is unique within the
/// instrument; the position in `Instrument::questions` is the
/// presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub text: String,
}

/// One point on an instrument's answer scale. Options are listed from
/// least to most severe; `value` is what the scorer sums.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: i64,
}

/// A contiguous range of totals mapped to one severity tier.
/// Both bounds are inclusive; `max` exists for display, the scorer only
/// tests `min`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub severity: SeverityLevel,
    pub min: i64,
    pub max: i64,
}

/// Severity-banding table for one instrument.
///
/// `bands` is ordered from most to least severe. Instruments differ in
/// band count (PHQ-9 carries five tiers, the others four); the scorer
/// walks the list and never names a tier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRules {
    pub max_score: i64,
    pub bands: Vec<SeverityBand>,
}

impl ScoringRules {
    /// Map a total to its severity tier: first band (scanning from most
    /// severe) whose lower bound the total meets, defaulting to the
    /// lowest tier. Totals below zero land in the lowest tier too.
    pub fn severity_for(&self, total: i64) -> SeverityLevel {
        self.bands
            .iter()
            .find(|band| total >= band.min)
            .or_else(|| self.bands.last())
            .map(|band| band.severity)
            .unwrap_or(SeverityLevel::Minimal)
    }
}

/// A standardized self-report screening instrument: fixed questions, a
/// fixed answer scale, and fixed severity bands. Question text, option
/// labels, and band boundaries reproduce the published clinical tools
/// and must not be edited.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub answer_options: Vec<AnswerOption>,
    pub scoring: ScoringRules,
}

/// The set of instruments available to the application. Built once at
/// startup and passed by reference; immutable thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    instruments: Vec<Instrument>,
}

impl Catalog {
    /// A catalog with an explicit instrument list. Tests use this to
    /// score against synthetic instruments.
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// The four standard Solace screening instruments.
    pub fn standard() -> Self {
        Self::new(vec![
            crate::instruments::phq9::definition(),
            crate::instruments::gad7::definition(),
            crate::instruments::asrs::definition(),
            crate::instruments::dla20::definition(),
        ])
    }

    /// Look up an instrument by ID.
    pub fn get(&self, id: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.id == id)
    }

    /// All instruments in registration order.
    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }
}
