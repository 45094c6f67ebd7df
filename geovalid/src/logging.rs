//! Logging infrastructure for geovalid.
//!
//! Structured logging via `tracing`, written to a session log file through
//! a non-blocking appender. The previous session's file is truncated on
//! start. Stdout output is optional and off during validation runs, where
//! verdict lines own the terminal. Level defaults to `info` and can be
//! raised via `RUST_LOG` or the debug flag.

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging with file output only.
///
/// Shorthand for [`init_logging_full`] with stdout disabled and default
/// level filtering.
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    init_logging_full(log_dir, log_file, false, false)
}

/// Initialize the logging system.
///
/// Creates the log directory if needed and truncates the previous session's
/// log file.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "geovalid.log")
/// * `stdout_enabled` - Also mirror log lines to stdout
/// * `debug_mode` - Force debug-level logging regardless of RUST_LOG
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be truncated.
pub fn init_logging_full(
    log_dir: &str,
    log_file: &str,
    stdout_enabled: bool,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Truncate the previous session's log, creating the file if absent
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .compact();

    let stdout_layer = if stdout_enabled {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(true)
                .compact(),
        )
    } else {
        None
    };

    let env_filter = if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    // init_logging_full installs a process-global subscriber, so actual
    // logging is exercised by running the CLI; these tests cover the file
    // handling around it.

    #[test]
    fn test_creates_directory_and_truncates_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");
        let log_path = log_dir.join("test.log");

        fs::create_dir_all(&log_dir).expect("Failed to create directory");
        fs::write(&log_path, "old session data").expect("Failed to seed log file");

        // Truncation behavior: writing empty content clears the file
        fs::write(&log_path, "").expect("Failed to truncate");
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_nested_log_directory_creation() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("deep").join("nested").join("logs");

        fs::create_dir_all(&log_dir).expect("Failed to create nested directory");
        assert!(Path::new(&log_dir).exists());
    }
}
