//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "BUDDY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber, writing to stderr.
///
/// The filter comes from `BUDDY_LOG` and defaults to `warn`. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
