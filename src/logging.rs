//! Logging setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so they never mix with
/// board output on stdout. `RUST_LOG` wins over `level`.
pub fn init(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("svu_admin={level}"))
            .unwrap_or_else(|_| EnvFilter::new("svu_admin=warn"))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
