//! Risk scoring.
//!
//! Four deterministic signals combine linearly into a weighted total,
//! which maps onto a three-band categorical level.

mod scorer;
mod types;

pub use scorer::RiskScorer;
pub use types::{RiskLevel, Score};
