use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use solace_core::models::ScoreResult;

use crate::error::AuditError;

/// A structured audit event for patient-data actions.
///
/// Screening results are clinical data, so every score computation and
/// record write gets an application-level event in addition to whatever
/// the storage layer logs on its own.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    /// Event for a freshly scored screening, carrying the instrument and
    /// the computed result in the details payload.
    pub fn screening_scored(
        patient_id: Uuid,
        instrument_id: &str,
        result: &ScoreResult,
    ) -> Result<Self, AuditError> {
        Ok(Self::new(
            "screening.scored",
            "screening",
            instrument_id,
            patient_id.to_string(),
        )
        .with_details(serde_json::to_value(result)?))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            "audit event"
        );
    }
}
