use solace_core::models::SeverityLevel;

use crate::catalog::{AnswerOption, Instrument, Question, ScoringRules, SeverityBand};

const QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed? Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead or of hurting yourself in some way",
];

/// PHQ-9: Patient Health Questionnaire, nine-item depression module.
/// 4-point frequency scale (0-3), total 0-27. The only instrument with
/// five severity tiers.
pub fn definition() -> Instrument {
    Instrument {
        id: "depression".to_string(),
        name: "PHQ-9".to_string(),
        full_name: "Patient Health Questionnaire-9".to_string(),
        description: "Over the last 2 weeks, how often have you been bothered by any of the following problems?".to_string(),
        questions: QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, text)| question(i as u32 + 1, text))
            .collect(),
        answer_options: vec![
            option("Not at all", 0),
            option("Several days", 1),
            option("More than half the days", 2),
            option("Nearly every day", 3),
        ],
        scoring: ScoringRules {
            max_score: 27,
            bands: vec![
                band(SeverityLevel::Severe, 20, 27),
                band(SeverityLevel::ModeratelySevere, 15, 19),
                band(SeverityLevel::Moderate, 10, 14),
                band(SeverityLevel::Mild, 5, 9),
                band(SeverityLevel::Minimal, 0, 4),
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
