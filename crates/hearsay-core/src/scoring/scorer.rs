//! Weighted risk scoring over extracted claims, citations, and
//! glossary mismatches.

use rustc_hash::FxHashSet;

use crate::citations::Citation;
use crate::claims::Claim;
use crate::config::{AnalysisConfig, RiskThresholds, ScoreWeights};
use crate::errors::ConfigError;
use crate::glossary::Mismatch;
use crate::matching::KeywordSet;

use super::types::{RiskLevel, Score};

/// Combines four independent signals into a weighted total and a
/// categorical level. All weights and thresholds come from config; the
/// defaults are documented on the config types.
pub struct RiskScorer {
    weights: ScoreWeights,
    thresholds: RiskThresholds,
    clickbait: KeywordSet,
    absolute: KeywordSet,
}

impl RiskScorer {
    pub fn new(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            weights: config.scoring.weights.clone(),
            thresholds: config.scoring.thresholds.clone(),
            clickbait: KeywordSet::compile(
                "scoring.clickbait_terms",
                &config.scoring.clickbait_terms,
            )?,
            absolute: KeywordSet::compile(
                "extraction.absolute_terms",
                &config.extraction.absolute_terms,
            )?,
        })
    }

    /// Score one article's extraction output. An empty article scores a
    /// total of 0.0 at the low level.
    pub fn score(&self, claims: &[Claim], citations: &[Citation], mismatches: &[Mismatch]) -> Score {
        let clickbait = claims.iter().any(|c| self.clickbait.contains(&c.text));
        let absolute_language_count = claims
            .iter()
            .filter(|c| self.absolute.contains(&c.text))
            .count() as u32;

        let covered: FxHashSet<usize> = citations.iter().filter_map(|c| c.claim).collect();
        let missing_evidence_count =
            (0..claims.len()).filter(|i| !covered.contains(i)).count() as u32;

        let mismatch_count = mismatches.len() as u32;

        let clickbait_component = if clickbait { self.weights.clickbait } else { 0.0 };
        let weighted_total = clickbait_component
            + self.weights.absolute_language * f64::from(absolute_language_count)
            + self.weights.missing_evidence * f64::from(missing_evidence_count)
            + self.weights.glossary_mismatch * f64::from(mismatch_count);

        Score {
            clickbait,
            absolute_language_count,
            missing_evidence_count,
            mismatch_count,
            weighted_total,
            risk_level: self.level(weighted_total),
        }
    }

    /// Map a weighted total onto its band. Boundaries are inclusive on
    /// the lower band: a total exactly at `low_max` is still low.
    pub fn level(&self, total: f64) -> RiskLevel {
        if total <= self.thresholds.low_max {
            RiskLevel::Low
        } else if total <= self.thresholds.medium_max {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
