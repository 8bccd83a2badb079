//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `DAYBOOK_LOG` when set, otherwise from the `-v` count.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
