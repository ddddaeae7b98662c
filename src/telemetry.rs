//! Logging setup. Compact output on stderr, filterable via `DAYMAP_LOG`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber. Safe to call once at startup; a second
/// call is a no-op so tests that spawn the binary in-process stay quiet.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("DAYMAP_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("daymap=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}
