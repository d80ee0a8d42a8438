//! Trusted term store and claim comparison.

use std::collections::{BTreeMap, BTreeSet};

use crate::claims::Claim;
use crate::errors::ConfigError;
use crate::matching::{contains_word, word_positions};

use super::types::{Mismatch, MismatchReason};

/// Tokens that flip an accepted phrase into a contradiction when one
/// appears in the lookback window before it.
const NEGATORS: &[&str] = &["not", "never", "no", "cannot"];

/// How many tokens before an accepted phrase are inspected for negation.
/// An intervening adverb ("never actually reduces") stays inside the
/// window; a negator further back in the sentence does not.
const NEGATION_LOOKBACK_TOKENS: usize = 3;

/// Trusted medical terms mapped to their accepted phrasings. Keys and
/// phrases are stored lowercased and trimmed; iteration is alphabetical,
/// so comparison output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    terms: BTreeMap<String, BTreeSet<String>>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or merge the accepted phrases for `term`. Calling again with
    /// the same phrases is a no-op. Fails when `term` is blank, or when
    /// the phrase set is empty after trimming: an entry without accepted
    /// phrasing would turn every reference into a guaranteed mismatch.
    pub fn add_term<I, S>(&mut self, term: &str, phrases: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = term.trim().to_lowercase();
        if key.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "glossary.term".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        let cleaned: BTreeSet<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err(ConfigError::EmptyPhraseSet { term: key });
        }
        self.terms.entry(key).or_default().extend(cleaned);
        Ok(())
    }

    /// Remove a term. Returns whether it was present.
    pub fn remove_term(&mut self, term: &str) -> bool {
        self.terms.remove(&term.trim().to_lowercase()).is_some()
    }

    /// Accepted phrases for `term`, if registered.
    pub fn phrases_for(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.terms.get(&term.trim().to_lowercase())
    }

    /// Registered terms, alphabetically.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compare claims against every registered term. A claim that
    /// references a term (whole-word, case-insensitive) must contain at
    /// least one of its accepted phrasings in non-negated form. Claims
    /// referencing no registered term produce nothing. Output is ordered
    /// by claim index, then term.
    pub fn compare(&self, claims: &[Claim]) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();
        for (claim_index, claim) in claims.iter().enumerate() {
            let lower = claim.text.to_lowercase();
            for (term, phrases) in &self.terms {
                if !contains_word(&lower, term) {
                    continue;
                }
                match phrase_status(&lower, phrases) {
                    PhraseStatus::Approved => {}
                    PhraseStatus::Absent => mismatches.push(Mismatch {
                        claim_index,
                        term: term.clone(),
                        reason: MismatchReason::MissingApprovedPhrase,
                    }),
                    PhraseStatus::Negated(phrase) => mismatches.push(Mismatch {
                        claim_index,
                        term: term.clone(),
                        reason: MismatchReason::ContradictedPhrase { phrase },
                    }),
                }
            }
        }
        mismatches
    }
}

enum PhraseStatus {
    Approved,
    Absent,
    Negated(String),
}

/// An entry is satisfied when at least one occurrence of one accepted
/// phrase is not negated. When every occurrence found is negated the
/// entry is contradicted; when no phrase occurs at all it is missing.
fn phrase_status(lower: &str, phrases: &BTreeSet<String>) -> PhraseStatus {
    let mut negated: Option<String> = None;
    for phrase in phrases {
        let positions = word_positions(lower, phrase);
        if positions.is_empty() {
            continue;
        }
        if positions.iter().any(|&at| !negated_before(lower, at)) {
            return PhraseStatus::Approved;
        }
        if negated.is_none() {
            negated = Some(phrase.clone());
        }
    }
    match negated {
        Some(phrase) => PhraseStatus::Negated(phrase),
        None => PhraseStatus::Absent,
    }
}

/// Whether one of the last few tokens before byte offset `at` negates
/// what follows.
fn negated_before(text: &str, at: usize) -> bool {
    text[..at]
        .split_whitespace()
        .rev()
        .take(NEGATION_LOOKBACK_TOKENS)
        .any(|token| {
            let token = token.trim_matches(|c: char| !c.is_alphanumeric());
            NEGATORS.contains(&token) || token.ends_with("n't")
        })
}
