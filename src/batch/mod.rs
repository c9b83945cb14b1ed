//! Directory-driven batch processing
//!
//! This module enumerates the images of a directory and runs every one of
//! them through decode, the transform pipeline and encode.

pub mod config;
pub mod filter;
pub mod processor;

pub use config::BatchConfig;
pub use filter::{has_extension, select_entries};
pub use processor::{BatchProcessor, BatchReport};
