//! Domain models for vital-sign scoring
//!
//! Readings flow into the scoring algorithm; score records and alert colors
//! flow out of it.

pub mod alert;
pub mod reading;
pub mod score;

// Re-export commonly used types
pub use alert::AlertColor;
pub use reading::Reading;
pub use score::ScoreRecord;
