//! Console logging for the command line tools.
//!
//! Per-file progress and warnings are emitted as `tracing` events and written to stderr, so
//! stdout only carries the summaries printed by the binaries.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

/// Filter applied to the console subscriber.
const CONSOLE_FILTER: &str = "pages_relativizer=info";

/// Install a stderr subscriber for the crate's events.
pub fn init_console_logging() -> Result<()> {
  let subscriber = registry()
    .with(
      fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time(),
    )
    .with(EnvFilter::new(CONSOLE_FILTER));

  tracing::subscriber::set_global_default(subscriber)
    .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {}", e))
}
