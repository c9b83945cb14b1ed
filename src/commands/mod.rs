//! CLI command implementations
//!
//! This module contains the argument definitions and the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod process_command;

pub use command_traits::{Command, CommandFactory};
pub use process_command::ProcessCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::pgm::errors::PgmResult;

/// Builds the command-line interface
///
/// Every option is optional; with no arguments the current directory is
/// scanned for `.pgm` files.
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("pgmbatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Threshold and rotate every raw PGM image in a directory")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Directory to scan (default: current directory)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .help("File extension to process, case-sensitive (default: pgm)")
                .value_name("EXT")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file providing 'directory' and 'extension'")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct PgmBatchCommandFactory;

impl PgmBatchCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PgmBatchCommandFactory
    }
}

impl Default for PgmBatchCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for PgmBatchCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> PgmResult<Box<dyn Command>> {
        Ok(Box::new(ProcessCommand::new(args)?))
    }
}
