//! Structured logging setup
//!
//! Logs go to stderr so they never interleave with the report tables on
//! stdout. Priority: RUST_LOG > --verbose (debug) > default "warn".

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pick the filter directive for the given verbosity when RUST_LOG is unset
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Initialise the tracing subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
}
