//! Scoring algorithm for vital-sign series
//!
//! Pure computation only: no I/O and no shared mutable state.

pub mod compositor;
pub mod loss_prior;
pub mod risk;
pub mod trend;

pub use compositor::{ScoreCompositor, classify_reading, clip_score, score_readings};
pub use loss_prior::{loss_boosts, sigmoid};
pub use trend::{TrendPenalties, TrendPenaltyEngine, TrendSource};
