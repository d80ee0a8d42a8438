//! Claim extraction.
//!
//! Finds sentence-like units that assert something factual: causal and
//! remedy language, proof appeals, statistics, absolute wording.

mod extractor;
mod rules;
mod types;

pub use extractor::ClaimExtractor;
pub use types::{Claim, ClaimTrigger};
