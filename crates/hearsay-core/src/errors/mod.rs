//! Error handling for hearsay.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
