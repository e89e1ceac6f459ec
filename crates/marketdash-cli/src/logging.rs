use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

/// Console commands log to stderr so stdout stays clean for text/JSON output.
pub fn init_stderr(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The dashboard owns the terminal, so its logs go to a file or nowhere.
///
/// The returned guard flushes the writer on drop and must outlive the TUI.
pub fn init_file(level: LogLevel, path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init();

    Ok(Some(guard))
}
