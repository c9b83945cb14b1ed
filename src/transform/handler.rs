//! Transform strategy trait definition

use crate::pgm::errors::PgmResult;
use crate::pgm::raster::Raster;

/// Strategy trait for a derived-image transform
pub trait RasterTransform: Send + Sync {
    /// Produce a new raster from `raster`, leaving the input untouched
    fn apply(&self, raster: &Raster) -> PgmResult<Raster>;

    /// Get the name of this transform
    fn name(&self) -> &'static str;

    /// Prefix prepended to the input file name to form the output name
    fn output_prefix(&self) -> &'static str;
}
