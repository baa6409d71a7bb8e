//! Tracing setup for the CLI
//!
//! Logs go to stderr so stdout only carries the run summary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "CRUMB_LOG";

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "crumb=debug"
    } else {
        "crumb=warn"
    }
}

/// Install the global subscriber. Returns false if one was already set.
pub fn init(verbose: bool, color: bool) -> bool {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .is_ok()
}
