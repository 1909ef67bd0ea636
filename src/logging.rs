//! Subscriber setup for the `csvline` binary
//!
//! The library emits `tracing` events only (unterminated quotes, stream
//! errors, skipped comment lines). This module routes them to stderr so the
//! token dump on stdout can be piped without log noise.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the global subscriber.
///
/// An explicit `RUST_LOG` wins over `--debug`, which wins over the default.
pub fn init(debug_flag: bool) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) if debug_flag => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new(DEFAULT_LOG_LEVEL),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "csvline starting");
}
