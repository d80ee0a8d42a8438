//! Pipeline orchestration.
//!
//! Normalize, extract claims and citations, compare against the shared
//! glossary, score, and keep the result history that trend statistics
//! are computed from.

mod orchestrator;
mod types;

pub use orchestrator::Analyzer;
pub use types::{AnalysisResult, Article, LevelBreakdown, Trend};
