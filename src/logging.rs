//! Diagnostic tracing for the CLI.
//!
//! Answers go to stdout; everything logged here goes to stderr so the two
//! never mix.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `debug` with `--verbose`, `warn` otherwise.
///
/// # Example
/// ```bash
/// RUST_LOG=mullover=trace mullover mul input/day3.txt
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(std::io::stderr).compact()).init();
}
