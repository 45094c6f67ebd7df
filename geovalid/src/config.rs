//! Configuration file handling for ~/.geovalid/config.ini.
//!
//! Geovalid keeps its settings small: a `[logging]` section naming the log
//! file and whether log lines may also go to stdout. Missing file or keys
//! fall back to defaults, so a fresh install works without any setup.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default log file path, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/geovalid.log";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// Logging settings from the `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Path of the log file.
    pub file: PathBuf,
    /// Whether log lines are also written to stdout. Off by default:
    /// verdict output owns stdout during validation.
    pub stdout: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            stdout: false,
        }
    }
}

/// Loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load configuration from the default path (~/.geovalid/config.ini).
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::DirectoryError)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("logging"))
            .set("file", self.logging.file.to_string_lossy().to_string())
            .set("stdout", self.logging.stdout.to_string());

        ini.write_to_file(path)
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(file) = section.get("file") {
                config.logging.file = PathBuf::from(file);
            }
            if let Some(stdout) = section.get("stdout") {
                config.logging.stdout =
                    stdout.parse().map_err(|_| ConfigError::InvalidValue {
                        section: "logging".to_string(),
                        key: "stdout".to_string(),
                        value: stdout.to_string(),
                        reason: "expected 'true' or 'false'".to_string(),
                    })?;
            }
        }

        Ok(config)
    }
}

/// Get the path to the config directory (~/.geovalid).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geovalid")
}

/// Get the path to the config file (~/.geovalid/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
