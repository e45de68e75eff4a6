use solace_core::models::{Response, ScoreResult, ScreeningRecord, SeverityLevel};
use uuid::Uuid;

#[test]
fn severity_serializes_to_kebab_case_labels() {
    let labels: Vec<String> = [
        SeverityLevel::Minimal,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::ModeratelySevere,
        SeverityLevel::Severe,
    ]
    .iter()
    .map(|s| serde_json::to_string(s).unwrap())
    .collect();

    assert_eq!(
        labels,
        [
            "\"minimal\"",
            "\"mild\"",
            "\"moderate\"",
            "\"moderately-severe\"",
            "\"severe\"",
        ]
    );
}

#[test]
fn severity_display_matches_the_wire_label() {
    assert_eq!(
        SeverityLevel::ModeratelySevere.to_string(),
        "moderately-severe"
    );
    assert_eq!(SeverityLevel::Minimal.to_string(), "minimal");
}

#[test]
fn severity_ordering_runs_least_to_most_severe() {
    assert!(SeverityLevel::Minimal < SeverityLevel::Mild);
    assert!(SeverityLevel::Moderate < SeverityLevel::ModeratelySevere);
    assert!(SeverityLevel::ModeratelySevere < SeverityLevel::Severe);
}

#[test]
fn response_uses_the_frontend_field_names() {
    let response: Response = serde_json::from_str(r#"{"questionId": 4, "answer": 2}"#).unwrap();
    assert_eq!(response.question_id, 4);
    assert_eq!(response.answer, 2);
}

#[test]
fn screening_record_captures_the_raw_responses() {
    let responses = vec![
        Response {
            question_id: 1,
            answer: 2,
        },
        Response {
            question_id: 2,
            answer: 3,
        },
    ];
    let result = ScoreResult {
        total: 5,
        severity: SeverityLevel::Mild,
        percentage: 24,
    };

    let record = ScreeningRecord::new(Uuid::new_v4(), "depression", &responses, result).unwrap();
    assert_eq!(record.instrument_id, "depression");
    assert_eq!(record.result, result);
    assert_eq!(record.responses[0]["questionId"], 1);
    assert_eq!(record.responses[1]["answer"], 3);
}

#[test]
fn score_result_round_trips_through_json() {
    let result = ScoreResult {
        total: 17,
        severity: SeverityLevel::ModeratelySevere,
        percentage: 63,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"moderately-severe\""));

    let back: ScoreResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
