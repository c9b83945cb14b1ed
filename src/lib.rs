pub mod pgm;
pub mod transform;
pub mod batch;
pub mod utils;
pub mod commands;

pub use pgm::{decode, encode, PgmError, PgmResult, Raster};
pub use transform::{rotate90, threshold};
pub use batch::{BatchConfig, BatchProcessor, BatchReport};
