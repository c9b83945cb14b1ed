//! Batch processing command
//!
//! This module implements the command that thresholds and rotates every
//! image of a directory.

use clap::ArgMatches;
use log::{debug, info};
use std::path::PathBuf;

use crate::batch::{BatchConfig, BatchProcessor};
use crate::commands::command_traits::Command;
use crate::pgm::errors::PgmResult;

/// Command for processing a directory of PGM files
pub struct ProcessCommand {
    /// Resolved directory and extension
    config: BatchConfig,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl ProcessCommand {
    /// Create a new process command
    ///
    /// Defaults are overlaid first with the `--config` file, if any, and then
    /// with `--dir` and `--extension`.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new ProcessCommand instance or a configuration error
    pub fn new(args: &ArgMatches) -> PgmResult<Self> {
        let mut config = match args.get_one::<String>("config") {
            Some(path) => BatchConfig::from_toml_file(path)?,
            None => BatchConfig::default(),
        };

        if let Some(dir) = args.get_one::<String>("dir") {
            config.directory = PathBuf::from(dir);
        }
        if let Some(extension) = args.get_one::<String>("extension") {
            config.set_extension(extension)?;
        }
        debug!("Resolved configuration: {:?}", config);

        Ok(ProcessCommand {
            config,
            show_progress: !args.get_flag("quiet"),
        })
    }

    /// Configuration this command will run with
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }
}

impl Command for ProcessCommand {
    fn execute(&self) -> PgmResult<()> {
        info!(
            "Processing .{} files in {}",
            self.config.extension,
            self.config.directory.display()
        );

        let processor = BatchProcessor::new(self.config.clone()).with_progress(self.show_progress);
        let report = processor.run()?;

        info!(
            "Batch complete: {} file(s), {} output(s)",
            report.files_processed, report.outputs_written
        );
        Ok(())
    }
}
