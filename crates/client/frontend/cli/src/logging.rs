//! File logging for the terminal client.
//!
//! The terminal is owned by ratatui, so tracing output goes to a file only.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "lobby.log";

/// Installs the global subscriber writing to `<dir>/lobby.log`.
///
/// `RUST_LOG` controls filtering (default: `info`). The returned guard
/// flushes pending records when dropped; keep it alive until exit.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", dir.join(LOG_FILE).display());
    Ok(guard)
}

/// Platform data directory for logs, or `./logs` when no home is known.
pub fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "lobby")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn writes_into_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("session");

        let guard = setup_logging(Some(&nested)).unwrap();
        tracing::info!("hello from the lobby");
        drop(guard);

        assert!(nested.join(LOG_FILE).exists());
    }
}
