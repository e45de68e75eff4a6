use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::response::Response;
use super::score::ScoreResult;

/// A completed screening as the persistence layer stores it: the raw
/// responses plus the computed result, attached to a patient and a
/// timestamp. The engine only defines the shape; it never writes one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub instrument_id: String,
    pub responses: serde_json::Value,
    pub result: ScoreResult,
    pub taken_at: jiff::Timestamp,
}

impl ScreeningRecord {
    /// Assemble a record from a scored submission, stamped with a fresh
    /// id and the current time.
    pub fn new(
        patient_id: Uuid,
        instrument_id: impl Into<String>,
        responses: &[Response],
        result: ScoreResult,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            instrument_id: instrument_id.into(),
            responses: serde_json::to_value(responses)?,
            result,
            taken_at: jiff::Timestamp::now(),
        })
    }
}
