//! Tracing setup for hosts embedding the feedback core

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber
///
/// `RUST_LOG` wins over `default_level`. Returns false if a global
/// subscriber was already installed, which makes repeated calls harmless.
pub fn init_logging(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
