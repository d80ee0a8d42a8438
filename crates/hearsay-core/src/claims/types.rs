//! Claim data types.

use serde::{Deserialize, Serialize};

/// The rule category that qualified a sentence as a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimTrigger {
    /// "causes", "leads to", "triggers", "linked to".
    Causal,
    /// "cures", "heals", "eliminates", "reverses".
    Remedy,
    /// "prevents", "protects against", "reduces", "lowers".
    Preventive,
    /// "proven to", "studies show", "scientists confirm".
    Proof,
    /// "improves", "increases", "boosts", "restores".
    Outcome,
    /// Percentages, ratios, multiples.
    Statistical,
    /// Configured absolute-language terms.
    Absolute,
}

/// A sentence span asserted as fact. Offsets index the text the claim was
/// extracted from; claims are unique by position and listed in document
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The claim sentence, verbatim.
    pub text: String,
    /// Byte offset of the sentence start.
    pub start: usize,
    /// Byte offset one past the sentence end.
    pub end: usize,
    /// The rule that fired earliest inside the sentence.
    pub trigger: ClaimTrigger,
}
