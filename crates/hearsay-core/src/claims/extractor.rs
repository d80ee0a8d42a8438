//! Claim extraction over canonical text.

use tracing::debug;

use crate::config::ExtractionConfig;
use crate::errors::ConfigError;
use crate::matching::KeywordSet;

use super::rules::CLAIM_RULES;
use super::types::{Claim, ClaimTrigger};

/// Extracts claim sentences from text. Offsets in the returned claims
/// index the text passed to `extract`; the analyzer always passes
/// canonical text.
pub struct ClaimExtractor {
    min_claim_chars: usize,
    absolute: KeywordSet,
}

struct Candidate {
    start: usize,
    end: usize,
    match_at: usize,
    priority: usize,
    trigger: ClaimTrigger,
}

struct SentenceSpan<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl ClaimExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            min_claim_chars: config.min_claim_chars,
            absolute: KeywordSet::compile("extraction.absolute_terms", &config.absolute_terms)?,
        })
    }

    /// Scan `text` for claim sentences, in document order. Text with no
    /// qualifying sentence yields an empty vec.
    pub fn extract(&self, text: &str) -> Vec<Claim> {
        let mut candidates = Vec::new();
        for sentence in split_sentences(text) {
            if sentence.text.chars().count() < self.min_claim_chars {
                continue;
            }
            for (priority, rule) in CLAIM_RULES.iter().enumerate() {
                if let Some(m) = rule.regex.find(sentence.text) {
                    candidates.push(Candidate {
                        start: sentence.start,
                        end: sentence.end,
                        match_at: sentence.start + m.start(),
                        priority,
                        trigger: rule.trigger,
                    });
                }
            }
            if let Some(m) = self.absolute.first_match(sentence.text) {
                candidates.push(Candidate {
                    start: sentence.start,
                    end: sentence.end,
                    match_at: sentence.start + m.start,
                    priority: CLAIM_RULES.len(),
                    trigger: ClaimTrigger::Absolute,
                });
            }
        }
        resolve(text, candidates)
    }
}

/// Overlap resolution: the longest span starting earliest wins. Among
/// candidates for the same span, the earliest rule match decides the
/// trigger, with table order breaking exact position ties.
fn resolve(text: &str, mut candidates: Vec<Candidate>) -> Vec<Claim> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.match_at.cmp(&b.match_at))
            .then(a.priority.cmp(&b.priority))
    });

    let mut claims: Vec<Claim> = Vec::new();
    let mut covered_to = 0usize;
    for cand in candidates {
        if cand.start < covered_to {
            debug!(
                start = cand.start,
                end = cand.end,
                trigger = ?cand.trigger,
                "discarding overlapped claim candidate"
            );
            continue;
        }
        covered_to = cand.end;
        claims.push(Claim {
            text: text[cand.start..cand.end].to_string(),
            start: cand.start,
            end: cand.end,
            trigger: cand.trigger,
        });
    }
    claims
}

/// Boundary-exact sentence splitting: a sentence ends at `.`, `!`, or `?`
/// followed by a space or end of input.
fn split_sentences(text: &str) -> Vec<SentenceSpan<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0usize;
    for (idx, ch) in text.char_indices() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let end = idx + 1;
        if end < text.len() && bytes[end] != b' ' {
            continue;
        }
        push_span(text, start, end, &mut spans);
        start = (end + 1).min(text.len());
    }
    push_span(text, start, text.len(), &mut spans);
    spans
}

/// Push a trimmed sentence span; drops spans that are empty after
/// trimming. Trimming keeps direct callers with unnormalized spacing
/// safe, at no cost on canonical text.
fn push_span<'a>(
    text: &'a str,
    mut start: usize,
    mut end: usize,
    spans: &mut Vec<SentenceSpan<'a>>,
) {
    let bytes = text.as_bytes();
    while start < end && bytes[start] == b' ' {
        start += 1;
    }
    while end > start && bytes[end - 1] == b' ' {
        end -= 1;
    }
    if start < end {
        spans.push(SentenceSpan {
            text: &text[start..end],
            start,
            end,
        });
    }
}
