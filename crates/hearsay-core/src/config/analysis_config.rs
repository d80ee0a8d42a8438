//! Top-level analysis configuration.

use serde::{Deserialize, Serialize};

use super::{ExtractionConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Maximum accepted article size in bytes. Default: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1 << 20;

/// Top-level configuration aggregating all sub-configs.
/// Unknown TOML keys are ignored (forward-compatible); missing keys fall
/// back to compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    /// Analyze batches on the rayon pool. Output order matches input
    /// order either way. Default: true.
    pub parallel: bool,
    /// Reject article inputs larger than this many bytes. Default: 1 MiB.
    pub max_input_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            scoring: ScoringConfig::default(),
            parallel: true,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl AnalysisConfig {
    /// Load and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.min_claim_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.min_claim_chars".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.extraction.min_quote_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.min_quote_chars".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.extraction.lookback_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.lookback_chars".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_input_bytes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_input_bytes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        check_weight("scoring.weights.clickbait", self.scoring.weights.clickbait)?;
        check_weight(
            "scoring.weights.absolute_language",
            self.scoring.weights.absolute_language,
        )?;
        check_weight(
            "scoring.weights.missing_evidence",
            self.scoring.weights.missing_evidence,
        )?;
        check_weight(
            "scoring.weights.glossary_mismatch",
            self.scoring.weights.glossary_mismatch,
        )?;

        let thresholds = &self.scoring.thresholds;
        check_weight("scoring.thresholds.low_max", thresholds.low_max)?;
        if !thresholds.medium_max.is_finite() || thresholds.medium_max < thresholds.low_max {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.thresholds.medium_max".to_string(),
                message: "must be finite and at least scoring.thresholds.low_max".to_string(),
            });
        }

        Ok(())
    }
}

fn check_weight(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}
