//! Batch processor
//!
//! Runs every qualifying file of a directory through decode, the transform
//! pipeline and encode. The first error aborts the whole run; outputs
//! already written are left in place.

use log::{debug, info};
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::batch::config::BatchConfig;
use crate::batch::filter;
use crate::pgm::errors::PgmResult;
use crate::pgm::{reader, writer};
use crate::transform::{RasterTransform, TransformFactory};
use crate::utils::progress::ProgressTracker;

/// Summary of a completed batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    /// Number of input files decoded and transformed
    pub files_processed: usize,
    /// Number of derived files written
    pub outputs_written: usize,
}

/// Applies the transform pipeline to each image of a directory
pub struct BatchProcessor {
    /// Directory and extension to process
    config: BatchConfig,
    /// Transforms applied to every input, in output order
    transforms: Vec<Box<dyn RasterTransform>>,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl BatchProcessor {
    /// Create a processor running the standard threshold and rotate pipeline
    pub fn new(config: BatchConfig) -> Self {
        BatchProcessor {
            config,
            transforms: TransformFactory::standard_pipeline(),
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process every qualifying file in the configured directory
    ///
    /// Entries are selected up front, so files written by this run are
    /// never picked up as inputs.
    ///
    /// # Returns
    /// A report of the run, or the first error encountered
    pub fn run(&self) -> PgmResult<BatchReport> {
        let directory = self.config.directory.as_path();
        let entries = filter::select_entries(directory, &self.config.extension)?;
        info!(
            "Found {} .{} file(s) in {}",
            entries.len(),
            self.config.extension,
            directory.display()
        );

        let progress = if self.show_progress {
            ProgressTracker::new(entries.len() as u64, "Processing images")
        } else {
            ProgressTracker::hidden(entries.len() as u64)
        };

        let mut report = BatchReport::default();
        for name in &entries {
            progress.set_message(&name.to_string_lossy());
            match self.process_file(directory, name) {
                Ok(written) => {
                    report.files_processed += 1;
                    report.outputs_written += written;
                    progress.increment(1);
                }
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            }
        }
        progress.finish();

        info!(
            "Processed {} file(s), wrote {} output(s)",
            report.files_processed, report.outputs_written
        );
        Ok(report)
    }

    /// Decode one file and write one derived file per transform
    ///
    /// # Arguments
    /// * `directory` - Directory holding the input and receiving the outputs
    /// * `name` - File name of the input within `directory`
    ///
    /// # Returns
    /// Number of outputs written
    pub fn process_file(&self, directory: &Path, name: &OsStr) -> PgmResult<usize> {
        let input_path = directory.join(name);
        info!("Processing {}", input_path.display());

        let raster = reader::decode(&input_path)?;

        for transform in &self.transforms {
            let derived = transform.apply(&raster)?;
            let mut output_name = OsString::from(transform.output_prefix());
            output_name.push(name);
            let output_path = directory.join(output_name);
            writer::encode(&output_path, &derived)?;
            debug!("{} -> {}", transform.name(), output_path.display());
        }

        Ok(self.transforms.len())
    }
}
