//! Heuristic assertion-marker rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ClaimTrigger;

/// One claim heuristic: a trigger category and the pattern detecting it
/// inside a sentence.
pub(crate) struct ClaimRule {
    pub trigger: ClaimTrigger,
    pub regex: Regex,
}

impl ClaimRule {
    fn new(trigger: ClaimTrigger, pattern: &str) -> Self {
        Self {
            trigger,
            regex: Regex::new(pattern).expect("Invalid claim rule pattern"),
        }
    }
}

/// Static rules checked against every candidate sentence, in priority
/// order. The configured absolute-language terms form one further rule at
/// the lowest priority.
pub(crate) static CLAIM_RULES: Lazy<Vec<ClaimRule>> = Lazy::new(|| {
    vec![
        ClaimRule::new(
            ClaimTrigger::Causal,
            r"(?i)\b(causes?|caused|causing|leads? to|triggers?|linked to)\b",
        ),
        ClaimRule::new(
            ClaimTrigger::Remedy,
            r"(?i)\b(cures?|cured|heals?|eliminates?|reverses?)\b",
        ),
        ClaimRule::new(
            ClaimTrigger::Preventive,
            r"(?i)\b(prevents?|prevention|protects? against|reduces?|lowers?)\b",
        ),
        ClaimRule::new(
            ClaimTrigger::Proof,
            r"(?i)\b(proven to|proves?|scientists confirm|studies show|research shows|clinically proven)\b",
        ),
        ClaimRule::new(
            ClaimTrigger::Outcome,
            r"(?i)\b(improves?|increases?|boosts?|restores?)\b",
        ),
        ClaimRule::new(
            ClaimTrigger::Statistical,
            r"(?i)\b\d+(\.\d+)?\s*(%|percent\b|times\b)|\b\d+\s+(in|of)\s+\d+\b",
        ),
    ]
});
