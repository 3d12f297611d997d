//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the CLI.
///
/// Diagnostics always go to stderr so that JSON results on stdout stay
/// machine-readable. `--debug` (or `RUST_LOG`) raises the default level;
/// JSON mode also switches the log records themselves to JSON.
pub fn init_tracing(json_mode: bool, debug_enabled: bool) {
    let default_level = if debug_enabled { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
