//! Geovalid CLI - command-line interface
//!
//! This binary provides a command-line interface to the geovalid library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;
mod runner;

#[derive(Parser)]
#[command(name = "geovalid")]
#[command(version = geovalid::VERSION)]
#[command(about = "Validate geographic survey areas and sectors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a survey record file
    Validate {
        /// Path to the comma-separated survey file
        file: PathBuf,

        /// Enable debug-level logging
        #[arg(long)]
        debug: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate { file, debug } => commands::validate::run(&file, debug),
        Command::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
