//! Tracing setup for the binary.
//!
//! The filter comes from `VERSENOTE_LOG` (same syntax as `RUST_LOG`), falling
//! back to `warn`, or `debug` when `--verbose` is given. Events go to stderr so
//! command output on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG: &str = "VERSENOTE_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "versenote=debug,info" } else { "warn" }
}

/// Build the filter: the environment wins over the verbosity flag.
pub fn build_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    env_value
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let env_value = std::env::var(ENV_LOG).ok();
    let filter = build_filter(env_value.as_deref(), verbose);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
