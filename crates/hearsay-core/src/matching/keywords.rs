//! Case-insensitive whole-word keyword matching.
//!
//! Wraps an Aho-Corasick automaton in leftmost-longest mode so that
//! overlapping keywords resolve to the longest span starting earliest,
//! then filters matches down to whole words.

use aho_corasick::{AhoCorasick, MatchKind};
use rustc_hash::FxHashSet;

use crate::errors::ConfigError;

/// A single keyword hit inside a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// The canonical (lowercased) keyword that matched.
    pub term: &'a str,
    /// Byte offset of the match start in the haystack.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
}

/// A compiled set of keywords or phrases, matched case-insensitively and
/// only at word boundaries. Boundaries are enforced per side: a side whose
/// keyword edge is not alphanumeric (e.g. the `%` in `100%`) needs no
/// delimiter there.
#[derive(Debug)]
pub struct KeywordSet {
    terms: Vec<String>,
    automaton: AhoCorasick,
}

impl KeywordSet {
    /// Compile a keyword set. Entries are trimmed, lowercased, and
    /// de-duplicated; blank entries are dropped. `field` names the config
    /// field the terms came from, for error reporting.
    pub fn compile<I, S>(field: &str, terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut cleaned = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            if seen.insert(term.clone()) {
                cleaned.push(term);
            }
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .ascii_case_insensitive(true)
            .build(&cleaned)
            .map_err(|e| ConfigError::ValidationFailed {
                field: field.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            terms: cleaned,
            automaton,
        })
    }

    /// The canonical terms in this set, in registration order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether any keyword occurs as a whole word in `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// The first (leftmost-longest) whole-word hit in `text`.
    pub fn first_match(&self, text: &str) -> Option<KeywordMatch<'_>> {
        self.automaton
            .find_iter(text)
            .find(|m| word_bounded(text, m.start(), m.end()))
            .map(|m| KeywordMatch {
                term: &self.terms[m.pattern().as_usize()],
                start: m.start(),
                end: m.end(),
            })
    }

    /// All non-overlapping whole-word hits in `text`, left to right.
    pub fn matches(&self, text: &str) -> Vec<KeywordMatch<'_>> {
        self.automaton
            .find_iter(text)
            .filter(|m| word_bounded(text, m.start(), m.end()))
            .map(|m| KeywordMatch {
                term: &self.terms[m.pattern().as_usize()],
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

/// Whole-word containment of `needle` in `haystack`. Both sides are
/// expected in the same case; the glossary lowercases before calling.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && haystack
            .match_indices(needle)
            .any(|(at, _)| word_bounded(haystack, at, at + needle.len()))
}

/// Byte offsets of every whole-word occurrence of `needle` in `haystack`.
pub(crate) fn word_positions(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    haystack
        .match_indices(needle)
        .filter(|(at, _)| word_bounded(haystack, *at, at + needle.len()))
        .map(|(at, _)| at)
        .collect()
}

/// Word-boundary check for a match span. Patterns are valid UTF-8, so a
/// byte-level hit cannot begin or end mid-char and the slices below are
/// safe.
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let first_alnum = matched.chars().next().is_some_and(|c| c.is_alphanumeric());
    let last_alnum = matched.chars().next_back().is_some_and(|c| c.is_alphanumeric());

    let left_ok = !first_alnum
        || start == 0
        || !text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
    let right_ok = !last_alnum
        || end == text.len()
        || !text[end..].chars().next().is_some_and(|c| c.is_alphanumeric());

    left_ok && right_ok
}
