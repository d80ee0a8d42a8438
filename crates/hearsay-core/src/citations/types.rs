//! Citation data types.

use serde::{Deserialize, Serialize};

/// How a citation was expressed in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Url,
    Quote,
}

/// A URL or quoted span offered as evidence, in document order within its
/// article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// The URL, or the quoted text without its surrounding quotes.
    pub text: String,
    /// Byte offset of the citation start in the canonical text.
    pub offset: usize,
    pub kind: CitationKind,
    /// Index (within the owning article) of the claim this citation
    /// supports; `None` when no eligible claim precedes it inside the
    /// lookback window.
    pub claim: Option<usize>,
}
