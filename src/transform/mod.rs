//! Raster transforms
//!
//! This module implements the pure raster-to-raster operations applied by
//! the batch driver, plus a strategy trait pairing each one with the prefix
//! of the file it produces.

mod handler;
mod threshold;
mod rotate;
mod factory;

pub use handler::RasterTransform;
pub use threshold::{threshold, Threshold, LEVEL_HIGH, LEVEL_LOW, THRESHOLD_CUTOFF};
pub use rotate::{rotate90, Rotate90};
pub use factory::TransformFactory;
