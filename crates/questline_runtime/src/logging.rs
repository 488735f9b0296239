//! Log subscriber setup.
//!
//! Logs go to stderr so they never interleave with narration on stdout.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Picks the log filter: `QUESTLINE_LOG`, then `RUST_LOG`, then `fallback`.
#[must_use]
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global `tracing` subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
