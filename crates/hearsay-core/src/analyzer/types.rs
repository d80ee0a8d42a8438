//! Analysis result and trend types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::citations::Citation;
use crate::claims::Claim;
use crate::glossary::Mismatch;
use crate::scoring::Score;

/// One analyzed article. Immutable once extraction completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable content id: xxh3 of the raw text, as hex. Identical input
    /// text always gets the identical id.
    pub id: String,
    /// The text as supplied.
    pub raw: String,
    /// Canonical text every claim and citation offset indexes into.
    pub normalized: String,
    /// Informational source tag: host of the supplied source URL, else
    /// host of the first URL citation, else none.
    pub domain: Option<String>,
    /// Claims in document order.
    pub claims: Vec<Claim>,
    /// Citations in document order.
    pub citations: Vec<Citation>,
}

/// Everything one analysis run produced. Read-only to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub article: Article,
    pub score: Score,
    /// Ordered by claim index, then term.
    pub mismatches: Vec<Mismatch>,
    /// `evidence[i]` lists the indices of the citations associated with
    /// claim `i`.
    pub evidence: Vec<SmallVec<[usize; 4]>>,
}

impl AnalysisResult {
    /// The article's claims, in document order.
    pub fn claims(&self) -> &[Claim] {
        &self.article.claims
    }

    /// The article's citations, in document order.
    pub fn citations(&self) -> &[Citation] {
        &self.article.citations
    }
}

/// Cross-article aggregate, recomputed on demand from history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Number of results aggregated.
    pub articles: usize,
    /// Arithmetic mean of the weighted totals; 0.0 over empty history.
    pub mean_total: f64,
    pub levels: LevelBreakdown,
}

/// How many analyzed articles landed in each risk band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}
