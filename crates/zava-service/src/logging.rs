//! # Logging
//!
//! Installs the global tracing subscriber.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config file set one.
pub const DEFAULT_LOG_FILTER: &str = "info,zava=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=zava_store=trace` - Trace the storage layer only
/// - Otherwise `default_filter` (from config, usually [`DEFAULT_LOG_FILTER`])
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(DEFAULT_LOG_FILTER);
        init_tracing("warn");
    }
}
