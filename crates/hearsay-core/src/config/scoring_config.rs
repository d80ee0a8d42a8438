//! Scoring tuning: signal weights, risk thresholds, clickbait vocabulary.

use serde::{Deserialize, Serialize};

/// Weight applied when any claim carries clickbait wording.
pub const DEFAULT_CLICKBAIT_WEIGHT: f64 = 2.0;

/// Weight per claim containing absolute language.
pub const DEFAULT_ABSOLUTE_WEIGHT: f64 = 1.5;

/// Weight per claim with no associated citation.
pub const DEFAULT_MISSING_EVIDENCE_WEIGHT: f64 = 1.0;

/// Weight per glossary mismatch. The strongest single signal: a claim that
/// contradicts vetted phrasing is worse than one that is merely unsourced.
pub const DEFAULT_MISMATCH_WEIGHT: f64 = 2.5;

/// Weighted totals at or below this are low risk.
pub const DEFAULT_LOW_MAX: f64 = 2.0;

/// Weighted totals above the low band and at or below this are medium risk.
pub const DEFAULT_MEDIUM_MAX: f64 = 6.0;

/// Sensational wording that marks an article as clickbait.
pub const DEFAULT_CLICKBAIT_TERMS: &[&str] = &[
    "miracle",
    "you won't believe",
    "cure-all",
    "secret revealed",
    "instantly",
    "breakthrough",
    "guaranteed",
    "shocking",
];

/// Configuration for risk scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub thresholds: RiskThresholds,
    /// Clickbait terms, matched case-insensitively as whole words.
    pub clickbait_terms: Vec<String>,
}

/// Per-signal weights for the linear risk total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Default: 2.0.
    pub clickbait: f64,
    /// Default: 1.5.
    pub absolute_language: f64,
    /// Default: 1.0.
    pub missing_evidence: f64,
    /// Default: 2.5.
    pub glossary_mismatch: f64,
}

/// Band boundaries partitioning the weighted total into risk levels.
/// Both boundaries are inclusive on the lower band: a total exactly at
/// `low_max` is low, exactly at `medium_max` is medium.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Default: 2.0.
    pub low_max: f64,
    /// Default: 6.0.
    pub medium_max: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            thresholds: RiskThresholds::default(),
            clickbait_terms: DEFAULT_CLICKBAIT_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            clickbait: DEFAULT_CLICKBAIT_WEIGHT,
            absolute_language: DEFAULT_ABSOLUTE_WEIGHT,
            missing_evidence: DEFAULT_MISSING_EVIDENCE_WEIGHT,
            glossary_mismatch: DEFAULT_MISMATCH_WEIGHT,
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: DEFAULT_LOW_MAX,
            medium_max: DEFAULT_MEDIUM_MAX,
        }
    }
}
