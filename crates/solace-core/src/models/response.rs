use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One respondent answer to one screening question.
///
/// `answer` is the numeric value of the option the respondent picked.
/// The engine sums whatever values arrive; it is the UI's job to only
/// offer values from the instrument's answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: u32,
    pub answer: i64,
}
