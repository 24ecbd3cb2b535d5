//! Logging setup for the `folio` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so stdout stays clean for CSV and JSON output.
//!
//! The filter comes from `FOLIO_LOG` when it is set (any `EnvFilter` directive,
//! e.g. `FOLIO_LOG=folio=debug`), otherwise from the `-v` count.

use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Maps the number of `-v` flags to a default level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_line_number(verbose > 2)
        .with_writer(std::io::stderr);

    // try_init fails only when a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
