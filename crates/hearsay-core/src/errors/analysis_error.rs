//! Analysis errors.

use super::ConfigError;

/// Errors that can occur while analyzing article text.
/// Extraction ambiguity is not represented here: overlapping claim
/// candidates are resolved deterministically and only logged.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A writer panicked while holding the glossary lock, so its contents
    /// can no longer be trusted.
    #[error("Glossary lock poisoned")]
    GlossaryPoisoned,
}
