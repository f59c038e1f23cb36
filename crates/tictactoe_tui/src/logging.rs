//! Tracing subscriber setup.

use anyhow::{Context, anyhow};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs to a file so the terminal UI keeps the screen.
///
/// # Errors
///
/// Fails if the file cannot be created or a global subscriber is
/// already installed.
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install file logger: {}", e))?;

    info!(path = %path.display(), "File logging initialized");
    Ok(())
}

/// Logs to stderr, leaving stdout for the rendered game.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_stderr_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install stderr logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_stderr_init_reports_error() {
        let _ = init_stderr_logging();
        let err = init_stderr_logging().unwrap_err();
        assert!(err.to_string().contains("stderr logger"));
    }

    #[test]
    fn test_file_init_after_global_subscriber_reports_error() {
        let _ = init_stderr_logging();
        let dir = tempfile::tempdir().unwrap();
        let err = init_file_logging(&dir.path().join("tictactoe.log")).unwrap_err();
        assert!(err.to_string().contains("file logger"));
    }

    #[test]
    fn test_unwritable_log_path_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_file_logging(&dir.path().join("missing").join("tictactoe.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
