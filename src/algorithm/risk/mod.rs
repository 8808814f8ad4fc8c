//! Instantaneous risk of a single reading
//!
//! Sub-risk curves for each vital, the derived shock index, and their
//! weighted combination into a per-row base risk.

pub mod aggregate;
pub mod components;
pub mod shock_index;

pub use aggregate::{SubRisks, base_risks, row_risk};
pub use components::{
    heart_rate_risk, map_risk, resp_rate_risk, shock_index_risk, spo2_risk, systolic_risk,
};
pub use shock_index::{reading_shock_index, shock_index, shock_index_series};
