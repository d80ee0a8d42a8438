//! Text canonicalization.
//!
//! Everything downstream (claim rules, citation regexes, glossary
//! comparison) matches against the canonical form produced here, so raw
//! and normalized coordinates never have to be reconciled.

mod normalizer;

pub use normalizer::TextNormalizer;
