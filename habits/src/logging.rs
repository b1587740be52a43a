//! Stderr logging for the `habits` admin CLI.
//!
//! Store and service operations emit `tracing` events (`debug` for reads and
//! writes, `info` for mutations). The CLI prints results on stdout, so log
//! lines go to stderr and stay quiet unless `RUST_LOG` asks for them.
//! `habits-server` installs its own subscriber in `main`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the CLI subscriber: `RUST_LOG` filter (default `warn`), compact
/// format, stderr writer.
///
/// `RUST_LOG=habits=debug habits validate` shows each load and its row count.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
