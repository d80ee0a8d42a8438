//! hearsay-core: misinformation risk analysis for health-news text
//!
//! This crate provides the deterministic analysis pipeline for Hearsay:
//! - Normalize: markup stripping and whitespace/punctuation
//!   canonicalization; every later stage matches against the canonical text
//! - Claims: heuristic extraction of factual-sounding sentences
//! - Citations: URL and quoted-span evidence, tied to nearby claims
//! - Glossary: trusted term → accepted-phrasing comparison
//! - Scoring: four weighted signals combined into a categorical risk level
//! - Analyzer: orchestration, batch processing, cross-article trends
//!
//! Everything is pure in-memory computation: no I/O, no network, no NLP.
//! Report rendering (CSV/JSON/HTML) and persistence are external
//! collaborators; every public result type derives serde traits so they
//! can consume the pipeline's output directly.

pub mod analyzer;
pub mod citations;
pub mod claims;
pub mod config;
pub mod errors;
pub mod glossary;
pub mod matching;
pub mod normalize;
pub mod scoring;
pub mod tracing;

// Re-exports for convenience
pub use analyzer::{AnalysisResult, Analyzer, Article, LevelBreakdown, Trend};
pub use citations::{domain_of, Citation, CitationExtractor, CitationKind};
pub use claims::{Claim, ClaimExtractor, ClaimTrigger};
pub use config::{
    AnalysisConfig, ExtractionConfig, RiskThresholds, ScoreWeights, ScoringConfig,
};
pub use errors::{AnalysisError, ConfigError};
pub use glossary::{Glossary, Mismatch, MismatchReason};
pub use matching::{KeywordMatch, KeywordSet};
pub use normalize::TextNormalizer;
pub use scoring::{RiskLevel, RiskScorer, Score};
