//! URL and quoted-span extraction, claim association, host parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::claims::Claim;
use crate::config::ExtractionConfig;

use super::types::{Citation, CitationKind};

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bhttps?://[^\s)\]}>'"]+"#).expect("Invalid URL pattern"));

static QUOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid quote pattern"));

static AUTHORITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?|file)://([^/?#\s]+)").expect("Invalid authority pattern")
});

/// Extracts URL and quoted-span citations from canonical text and ties
/// each to the nearest preceding claim inside the lookback window.
pub struct CitationExtractor {
    min_quote_chars: usize,
    lookback_chars: usize,
}

impl CitationExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_quote_chars: config.min_quote_chars,
            lookback_chars: config.lookback_chars,
        }
    }

    /// Scan `text` for citations, in document order. `claims` must come
    /// from the same text so that offsets share one coordinate space.
    pub fn extract(&self, text: &str, claims: &[Claim]) -> Vec<Citation> {
        let mut citations = Vec::new();

        for m in URL_RE.find_iter(text) {
            let trimmed = m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']);
            if trimmed.ends_with("://") {
                continue;
            }
            citations.push(Citation {
                text: trimmed.to_string(),
                offset: m.start(),
                kind: CitationKind::Url,
                claim: None,
            });
        }

        for caps in QUOTE_RE.captures_iter(text) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if inner.as_str().chars().count() < self.min_quote_chars {
                continue;
            }
            citations.push(Citation {
                text: inner.as_str().to_string(),
                offset: whole.start(),
                kind: CitationKind::Quote,
                claim: None,
            });
        }

        citations.sort_by_key(|c| c.offset);

        for citation in citations.iter_mut() {
            citation.claim = claims
                .iter()
                .enumerate()
                .filter(|(_, c)| c.start < citation.offset)
                .filter(|(_, c)| citation.offset.saturating_sub(c.end) <= self.lookback_chars)
                .max_by_key(|(_, c)| c.start)
                .map(|(idx, _)| idx);
        }

        citations
    }
}

/// Extract the lowercased host from a URL-shaped string: scheme and
/// userinfo stripped, port dropped. Accepts `http`, `https`, and `file`
/// schemes; returns `None` when no host is recognizable.
pub fn domain_of(url: &str) -> Option<String> {
    let caps = AUTHORITY_RE.captures(url.trim())?;
    let authority = caps.get(1)?.as_str();
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}
