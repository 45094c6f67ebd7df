//! Config command - inspect and initialize the configuration file.

use clap::Subcommand;

use crate::error::CliError;
use geovalid::config::{config_file_path, ConfigFile};

/// Actions for the config command.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Create the default configuration file if it doesn't exist
    Init,
}

/// Run the config command.
pub fn run(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
        }
        ConfigAction::Init => {
            let path = ConfigFile::ensure_exists()?;
            println!("Configuration file: {}", path.display());
        }
    }

    Ok(())
}
