use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `SEQVIEW_LOG=seqview=debug`.
pub const LOG_ENV: &str = "SEQVIEW_LOG";

/// Send tracing output to `path`. The terminal belongs to the TUI, so nothing
/// is ever written to stdout or stderr while it runs.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "seqview=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
