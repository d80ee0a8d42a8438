//! Shared multi-keyword matching used by claim extraction, clickbait
//! detection, and glossary comparison.

mod keywords;

pub(crate) use keywords::{contains_word, word_positions};
pub use keywords::{KeywordMatch, KeywordSet};
