//! Diagnostic logging to stderr.
//!
//! User-facing results are printed by the commands; this subscriber only
//! carries the library's `tracing` events (loads, saves, skipped rows).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` if set. Otherwise logs errors only, or everything from
/// `markbook` down to `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let default = if verbose { "markbook=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
