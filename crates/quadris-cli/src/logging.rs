use std::{fs::File, path::Path, sync::Arc};

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Sends all log output to `path` so the terminal stays with the TUI.
///
/// `RUST_LOG` selects the filter; `info` is used when it is unset or invalid.
pub(crate) fn init(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore the error if a subscriber is already installed
    _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
