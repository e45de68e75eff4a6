use solace_core::models::SeverityLevel;

use crate::catalog::{AnswerOption, Instrument, Question, ScoringRules, SeverityBand};

const QUESTIONS: [&str; 18] = [
    "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
    "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
    "How often do you have problems remembering appointments or obligations?",
    "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
    "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
    "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
    "How often do you make careless mistakes when you have to work on a boring or difficult project?",
    "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
    "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
    "How often do you misplace or have difficulty finding things at home or at work?",
    "How often are you distracted by activity or noise around you?",
    "How often do you leave your seat in meetings or other situations in which you are expected to remain seated?",
    "How often do you feel restless or fidgety?",
    "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
    "How often do you find yourself talking too much when you are in social situations?",
    "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
    "How often do you have difficulty waiting your turn in situations when turn taking is required?",
    "How often do you interrupt others when they are busy?",
];

/// ASRS v1.1: Adult ADHD Self-Report Scale, full 18-item symptom
/// checklist. 5-point frequency scale (0-4), total 0-72.
pub fn definition() -> Instrument {
    Instrument {
        id: "adhd".to_string(),
        name: "ASRS".to_string(),
        full_name: "Adult ADHD Self-Report Scale v1.1".to_string(),
        description: "Please answer the questions below, rating yourself on how you have felt and conducted yourself over the past 6 months.".to_string(),
        questions: QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, text)| question(i as u32 + 1, text))
            .collect(),
        answer_options: vec![
            option("Never", 0),
            option("Rarely", 1),
            option("Sometimes", 2),
            option("Often", 3),
            option("Very often", 4),
        ],
        scoring: ScoringRules {
            max_score: 72,
            bands: vec![
                band(SeverityLevel::Severe, 48, 72),
                band(SeverityLevel::Moderate, 36, 47),
                band(SeverityLevel::Mild, 24, 35),
                band(SeverityLevel::Minimal, 0, 23),
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
