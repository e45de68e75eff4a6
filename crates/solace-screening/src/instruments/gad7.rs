use solace_core::models::SeverityLevel;

use crate::catalog::{AnswerOption, Instrument, Question, ScoringRules, SeverityBand};

const QUESTIONS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

/// GAD-7: Generalized Anxiety Disorder seven-item scale.
/// 4-point frequency scale (0-3), total 0-21, four severity tiers.
pub fn definition() -> Instrument {
    Instrument {
        id: "anxiety".to_string(),
        name: "GAD-7".to_string(),
        full_name: "Generalized Anxiety Disorder-7".to_string(),
        description: "Over the last 2 weeks, how often have you been bothered by the following problems?".to_string(),
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
            max_score: 21,
            bands: vec![
                band(SeverityLevel::Severe, 15, 21),
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
