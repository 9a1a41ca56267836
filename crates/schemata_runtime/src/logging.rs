//! Logging setup for the binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn,schemata_runtime=info";

/// Builds the event filter. `RUST_LOG` wins over `level`, which wins over
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        level
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Installs the global subscriber, writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(level: Option<&str>) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
