//! Diagnostic logging
//!
//! Events go to stderr so command output on stdout stays clean. The filter
//! comes from `PASSLOCKER_LOG` (same syntax as `RUST_LOG`); without it only
//! warnings are shown, or debug events with `--verbose`.
//!
//! Library code logs paths, counts and layouts. Record contents and
//! passphrases are never logged.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PASSLOCKER_LOG";

/// Build the filter for the given verbosity
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("passlocker=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("passlocker=warn"))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
