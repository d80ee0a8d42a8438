//! Trusted-term glossary and claim comparison.

mod store;
mod types;

pub use store::Glossary;
pub use types::{Mismatch, MismatchReason};
