//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the hearsay tracing/logging system.
///
/// Reads the `HEARSAY_LOG` environment variable for per-module log levels.
/// Format: `HEARSAY_LOG=hearsay_core::claims=debug,hearsay_core::analyzer=info`
///
/// Falls back to `hearsay_core=info` if `HEARSAY_LOG` is not set or is
/// invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HEARSAY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("hearsay_core=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
