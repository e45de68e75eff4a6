use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use solace_core::models::{Response, ScoreResult};

use crate::catalog::{Catalog, Instrument};
use crate::error::ScreeningError;

/// Score a completed screening.
///
/// The only failure is an instrument id the catalog does not know.
/// Responses are taken as given: duplicates are summed, missing
/// questions lower the total, and out-of-scale values pass straight
/// through. Callers who want those rejected run
/// [`Instrument::validate_responses`] first.
pub fn calculate_score(
    catalog: &Catalog,
    instrument_id: &str,
    responses: &[Response],
) -> Result<ScoreResult, ScreeningError> {
    let instrument = catalog
        .get(instrument_id)
        .ok_or_else(|| ScreeningError::UnknownInstrument(instrument_id.to_string()))?;
    Ok(instrument.score(responses))
}

impl Instrument {
    /// Sum the responses and band the total. Pure; order-independent.
    pub fn score(&self, responses: &[Response]) -> ScoreResult {
        let total: i64 = responses.iter().map(|r| r.answer).sum();
        let percentage =
            ((total as f64 / self.scoring.max_score as f64) * 100.0).round() as i64;
        ScoreResult {
            total,
            severity: self.scoring.severity_for(total),
            percentage,
        }
    }

    /// Check a response set against this instrument's question ids and
    /// answer scale. Strictly opt-in: the scorer never calls this, so
    /// partially-completed client state still scores.
    pub fn validate_responses(&self, responses: &[Response]) -> Vec<ValidationError> {
        let legal_values: Vec<i64> = self.answer_options.iter().map(|o| o.value).collect();

        let mut errors = Vec::new();
        for response in responses {
            if !self.questions.iter().any(|q| q.id == response.question_id) {
                errors.push(ValidationError {
                    question_id: response.question_id,
                    answer: response.answer,
                    message: format!(
                        "{}: question {} is not part of this instrument",
                        self.name, response.question_id,
                    ),
                });
            } else if !legal_values.contains(&response.answer) {
                errors.push(ValidationError {
                    question_id: response.question_id,
                    answer: response.answer,
                    message: format!(
                        "{}: answer {} for question {} is not on the {}-point scale",
                        self.name,
                        response.answer,
                        response.question_id,
                        legal_values.len(),
                    ),
                });
            }
        }
        errors
    }
}

/// A response rejected by the opt-in validation layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: u32,
    pub answer: i64,
    pub message: String,
}
