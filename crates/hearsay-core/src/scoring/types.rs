//! Scoring result types.

use serde::{Deserialize, Serialize};

/// Categorical risk level derived from the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Per-article risk breakdown. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Whether any claim carries clickbait wording.
    pub clickbait: bool,
    /// Claims containing absolute language.
    pub absolute_language_count: u32,
    /// Claims with no associated citation.
    pub missing_evidence_count: u32,
    /// Glossary mismatches.
    pub mismatch_count: u32,
    /// Weighted linear combination of the four signals.
    pub weighted_total: f64,
    pub risk_level: RiskLevel,
}
