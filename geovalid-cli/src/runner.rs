//! CLI runner for common setup.
//!
//! Encapsulates configuration loading and logging initialization so the
//! command handlers share one startup path.

use crate::error::CliError;
use geovalid::config::ConfigFile;
use geovalid::logging::{init_logging_full, LoggingGuard};
use tracing::info;

/// Runner that manages CLI lifecycle and shared state.
pub struct CliRunner {
    /// Logging guard - keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new() -> Result<Self, CliError> {
        Self::with_debug(false)
    }

    /// Create a new CLI runner with optional debug logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless
    ///   of RUST_LOG
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        // Split the configured log path into directory and file name
        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "geovalid.log".to_string());

        let logging_guard =
            init_logging_full(&log_dir, &log_file, config.logging.stdout, debug_mode)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    #[allow(dead_code)]
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Geovalid v{}", geovalid::VERSION);
        info!("Geovalid CLI: {} command", command);
    }
}
