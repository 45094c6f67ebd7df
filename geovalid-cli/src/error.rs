//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use geovalid::config::ConfigError;
use geovalid::record::RecordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigError),
    /// Failed to open or read the survey file
    FileRead {
        path: String,
        error: std::io::Error,
    },
    /// Survey file contents could not be parsed
    Records(RecordError),
    /// Failed to create the async runtime
    Runtime(String),
    /// The validation worker thread panicked
    ValidationWorker,
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Records(_) => {
                eprintln!();
                eprintln!("The survey file must be comma-separated with a header naming:");
                eprintln!("  AreaID, ALat1, ALon1, ALat2, ALon2,");
                eprintln!("  SectorID, c1, d1, c2, d2, c3, d3, c4, d4");
                eprintln!("where cN/dN are the sector corner latitudes/longitudes.");
            }
            CliError::FileRead { .. } => {
                eprintln!();
                eprintln!("Check that the path exists and is readable.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read '{}': {}", path, error)
            }
            CliError::Records(e) => write!(f, "Failed to parse survey file: {}", e),
            CliError::Runtime(msg) => write!(f, "Failed to start runtime: {}", msg),
            CliError::ValidationWorker => write!(f, "Validation worker failed unexpectedly"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::Records(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RecordError> for CliError {
    fn from(e: RecordError) -> Self {
        Self::Records(e)
    }
}
