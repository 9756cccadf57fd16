//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable: task lifecycle and
/// sweeps at `info`, everything else silent.
pub const DEFAULT_LOG_FILTER: &str = "url_probe_tasks=info";

/// Build the log filter from a raw `RUST_LOG` value, falling back to
/// [`DEFAULT_LOG_FILTER`].
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a fmt subscriber filtered by `RUST_LOG` unless one is already set.
///
/// e.g. `RUST_LOG=url_probe_tasks=debug` to see cache hits and misses.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .try_init();
}
