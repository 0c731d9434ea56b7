//! cpugraph — a scrolling CPU utilization graph panel for the terminal.
//!
//! Run with:  `RUST_LOG=info cpugraph`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // The panel owns stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("cpugraph v{} starting", env!("CARGO_PKG_VERSION"));

    graph_panel::run().map_err(Into::into)
}
