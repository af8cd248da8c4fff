//! File logging via tracing.
//!
//! The terminal belongs to the UI, so logs go to a daily rolling file.
//! `RUST_LOG` overrides the default filter.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;

/// Log file prefix inside the log directory.
pub const LOG_FILE_NAME: &str = "boton.log";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,boton=debug";

/// Error while setting up file logging.
#[derive(Debug)]
pub enum LoggingError {
    /// No platform data directory and no explicit log directory.
    NoDataDir,

    /// The log directory could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::NoDataDir => {
                write!(f, "Could not determine a local data directory for logs")
            }
            LoggingError::CreateDir { path, source } => {
                write!(f, "Could not create log directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::NoDataDir => None,
            LoggingError::CreateDir { source, .. } => Some(source),
        }
    }
}

/// Default log directory.
///
/// Linux: ~/.local/share/boton/logs/
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("boton").join("logs"))
        .ok_or(LoggingError::NoDataDir)
}

/// Create the log directory if needed.
pub fn prepare_log_dir(dir: &Path) -> Result<(), LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Install the global subscriber. Hold the returned guard until exit.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard, LoggingError> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    prepare_log_dir(dir)?;

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}

// ============================================================================
// TESTS
// ============================================================================
