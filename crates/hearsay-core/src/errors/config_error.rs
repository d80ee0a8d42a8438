//! Configuration errors.

/// Errors that can occur while loading analysis configuration or
/// authoring the glossary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A glossary term was registered with no accepted phrasing. Every
    /// reference to such a term would be a guaranteed mismatch, so the
    /// author has to opt into that explicitly rather than get it by default.
    #[error("Glossary term `{term}` has an empty accepted-phrase set")]
    EmptyPhraseSet { term: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Config parse error: {message}")]
    ParseError { message: String },
}
