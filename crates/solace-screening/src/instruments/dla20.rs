use solace_core::models::SeverityLevel;

use crate::catalog::{AnswerOption, Instrument, Question, ScoringRules, SeverityBand};

const QUESTIONS: [&str; 12] = [
    "Managing your physical health needs, including medications and appointments",
    "Keeping stable housing and maintaining your living space",
    "Communicating your needs clearly to the people around you",
    "Keeping yourself safe and avoiding risky situations",
    "Managing your time and keeping up with daily obligations",
    "Eating regular, adequate meals and maintaining nutrition",
    "Solving everyday problems and making decisions on your own",
    "Maintaining relationships with family members",
    "Managing alcohol or drug use so it does not interfere with daily life",
    "Taking part in leisure or recreational activities you enjoy",
    "Using community resources such as transportation, stores, or services",
    "Keeping up a supportive social network outside your family",
];

/// Daily-functioning screen in the style of the DLA-20: 12 areas of
/// daily living rated for difficulty. 5-point scale (0-4), total 0-48.
pub fn definition() -> Instrument {
    Instrument {
        id: "functioning".to_string(),
        name: "DFS-12".to_string(),
        full_name: "Daily Functioning Screen-12".to_string(),
        description: "Over the past 30 days, how much difficulty have you had with each of the following areas of daily life?".to_string(),
        questions: QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, text)| question(i as u32 + 1, text))
            .collect(),
        answer_options: vec![
            option("No difficulty", 0),
            option("Mild difficulty", 1),
            option("Moderate difficulty", 2),
            option("Severe difficulty", 3),
            option("Extreme difficulty", 4),
        ],
        scoring: ScoringRules {
            max_score: 48,
            bands: vec![
                band(SeverityLevel::Severe, 36, 48),
                band(SeverityLevel::Moderate, 24, 35),
                band(SeverityLevel::Mild, 12, 23),
                band(SeverityLevel::Minimal, 0, 11),
            ],
        },
    }
}

fn question(id: u32, text: &str) -> Question {
    Question {
        id,
        text: text.to_string(),
    }
}

fn option(label: &str, value: i64) -> AnswerOption {
    AnswerOption {
        label: label.to_string(),
        value,
    }
}

fn band(severity: SeverityLevel, min: i64, max: i64) -> SeverityBand {
    SeverityBand { severity, min, max }
}
