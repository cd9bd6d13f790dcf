//! Tracing subscriber setup for the `sort-race` binary and ad-hoc debugging.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, `race=info` by default.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("race=info"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}
