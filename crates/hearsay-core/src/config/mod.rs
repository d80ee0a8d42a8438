//! Configuration system for hearsay.
//! TOML-based, serde-deserialized, validated before any pipeline is built.

pub mod analysis_config;
pub mod extraction_config;
pub mod scoring_config;

pub use analysis_config::AnalysisConfig;
pub use extraction_config::ExtractionConfig;
pub use scoring_config::{RiskThresholds, ScoreWeights, ScoringConfig};
