//! Glossary comparison outcome types.

use serde::{Deserialize, Serialize};

/// Why a claim failed glossary comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchReason {
    /// The claim references the term but contains none of its accepted
    /// phrasings.
    MissingApprovedPhrase,
    /// The claim contains an accepted phrasing only in negated form.
    ContradictedPhrase { phrase: String },
}

/// A claim whose phrasing disagrees with the glossary entry for a term it
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Index of the claim within its article.
    pub claim_index: usize,
    /// The referenced glossary term.
    pub term: String,
    pub reason: MismatchReason,
}
