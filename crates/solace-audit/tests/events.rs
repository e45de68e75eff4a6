use solace_audit::AuditEvent;
use solace_core::models::{ScoreResult, SeverityLevel};
use uuid::Uuid;

#[test]
fn screening_scored_carries_the_result_as_details() {
    let patient_id = Uuid::new_v4();
    let result = ScoreResult {
        total: 16,
        severity: SeverityLevel::ModeratelySevere,
        percentage: 59,
    };

    let event = AuditEvent::screening_scored(patient_id, "depression", &result).unwrap();
    assert_eq!(event.action, "screening.scored");
    assert_eq!(event.resource_type, "screening");
    assert_eq!(event.resource_id, "depression");
    assert_eq!(event.actor, patient_id.to_string());

    let details = event.details.expect("details payload");
    assert_eq!(details["total"], 16);
    assert_eq!(details["severity"], "moderately-severe");
    assert_eq!(details["percentage"], 59);
}

#[test]
fn with_details_attaches_arbitrary_json() {
    let event = AuditEvent::new("screening.stored", "screening_record", "abc", "system")
        .with_details(serde_json::json!({"storage": "postgres"}));

    assert_eq!(event.details.unwrap()["storage"], "postgres");
}

#[test]
fn emit_logs_without_panicking() {
    AuditEvent::new("screening.viewed", "screening_record", "abc", "doctor-7").emit();
}
