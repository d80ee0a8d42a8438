//! Extraction tuning: claim sentence selection and citation association.

use serde::{Deserialize, Serialize};

/// Minimum sentence length (in chars) for a claim candidate.
pub const DEFAULT_MIN_CLAIM_CHARS: usize = 10;

/// Minimum length (in chars, between the quotes) for a quoted span to
/// count as a citation.
pub const DEFAULT_MIN_QUOTE_CHARS: usize = 3;

/// Maximum distance (in bytes of canonical text) between a claim's end and
/// a citation's start for the two to be associated.
pub const DEFAULT_LOOKBACK_CHARS: usize = 300;

/// Unqualified absolute-language terms. A claim containing one both
/// qualifies as a claim on its own and counts toward the absolute-language
/// score signal.
pub const DEFAULT_ABSOLUTE_TERMS: &[&str] = &[
    "always",
    "never",
    "guaranteed",
    "100%",
    "cure",
    "cures",
    "works for everyone",
    "zero risk",
];

/// Configuration for claim and citation extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum sentence length for a claim candidate. Default: 10.
    pub min_claim_chars: usize,
    /// Minimum quoted-span length for a citation. Default: 3.
    pub min_quote_chars: usize,
    /// Claim-to-citation association window. Default: 300.
    pub lookback_chars: usize,
    /// Absolute-language terms, matched case-insensitively as whole words.
    pub absolute_terms: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_claim_chars: DEFAULT_MIN_CLAIM_CHARS,
            min_quote_chars: DEFAULT_MIN_QUOTE_CHARS,
            lookback_chars: DEFAULT_LOOKBACK_CHARS,
            absolute_terms: DEFAULT_ABSOLUTE_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
