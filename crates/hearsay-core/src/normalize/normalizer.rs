//! Markup, whitespace, and punctuation canonicalization.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>")
        .expect("Invalid script/style pattern")
});

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("Invalid tag pattern"));

/// Cleans raw article text into the canonical form used by all downstream
/// matching. Idempotent: normalizing already-normalized text is a no-op.
///
/// Case is deliberately preserved. URLs and quoted spans are reported back
/// to callers verbatim, so case folding happens inside the matchers
/// instead of here.
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Produce the canonical form of `raw`. Empty input yields an empty
    /// string.
    ///
    /// - Script and style blocks, then remaining HTML tags, become spaces
    ///   (articles scraped from the web arrive as markup more often than
    ///   not; input without `<` skips this pass).
    /// - BOM, zero-width characters, and soft hyphens are removed.
    /// - Unicode spaces, newlines, and list bullets become ASCII spaces;
    ///   runs collapse to a single space; ends are trimmed.
    /// - Curly quotes, long dashes, and the ellipsis character become
    ///   their ASCII equivalents.
    /// - Runs of `!`/`?` collapse to their first character so repeated
    ///   terminators cannot manufacture extra sentence boundaries.
    pub fn normalize(&self, raw: &str) -> String {
        let stripped = strip_markup(raw);
        let mut canon = String::with_capacity(stripped.len());
        for ch in stripped.chars() {
            match ch {
                '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{00ad}' => {}
                '\u{2018}' | '\u{2019}' | '\u{201a}' => canon.push('\''),
                '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{00ab}' | '\u{00bb}' => {
                    canon.push('"')
                }
                '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' => canon.push('-'),
                '\u{2026}' => canon.push_str("..."),
                '\u{2022}' | '\u{00b7}' | '\u{2023}' | '\u{25e6}' => canon.push(' '),
                c if c.is_whitespace() => canon.push(' '),
                c => canon.push(c),
            }
        }

        let mut out = String::with_capacity(canon.len());
        let mut pending_space = false;
        let mut in_terminator_run = false;
        for ch in canon.chars() {
            if ch == ' ' {
                pending_space = true;
                in_terminator_run = false;
                continue;
            }
            let is_terminator = ch == '!' || ch == '?';
            if is_terminator && in_terminator_run {
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            in_terminator_run = is_terminator;
            out.push(ch);
        }
        out
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace script/style blocks and then any remaining tags with spaces.
/// Text without `<` passes through unchanged and unallocated.
fn strip_markup(raw: &str) -> std::borrow::Cow<'_, str> {
    use std::borrow::Cow;

    if !raw.contains('<') {
        return Cow::Borrowed(raw);
    }
    match SCRIPT_STYLE_RE.replace_all(raw, " ") {
        Cow::Borrowed(s) => TAG_RE.replace_all(s, " "),
        Cow::Owned(s) => Cow::Owned(TAG_RE.replace_all(&s, " ").into_owned()),
    }
}
