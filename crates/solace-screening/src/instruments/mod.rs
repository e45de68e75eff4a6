pub mod asrs;
pub mod dla20;
pub mod gad7;
pub mod phq9;
