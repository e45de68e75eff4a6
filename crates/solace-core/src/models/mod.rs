pub mod response;
pub mod score;
pub mod screening;

pub use response::Response;
pub use score::{ScoreResult, SeverityLevel};
pub use screening::ScreeningRecord;
