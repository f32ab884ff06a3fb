//! Logging init: one log file per application under the XDG state dir.

use anyhow::Result;
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when it is set and valid, else `default_filter`.
fn filter_from(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

fn env_filter(default_filter: &str) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(env.as_deref(), default_filter)
}

/// Log to `~/.local/state/<app>/<app>.log`.
///
/// Fails before installing a subscriber, so the caller can still fall back to
/// [`init_logging_stderr`].
pub fn init_logging(app: &str, default_filter: &str) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(app)?;
    let log_file_path = xdg_dirs.place_state_file(format!("{app}.log"))?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("{app} logging initialized at {}", log_file_path.display());
    Ok(())
}

pub fn init_logging_stderr(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
