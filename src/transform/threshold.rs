//! Fixed-cutoff binarization

use crate::pgm::errors::PgmResult;
use crate::pgm::raster::Raster;
use super::handler::RasterTransform;

/// Samples strictly above this value become `LEVEL_HIGH`
pub const THRESHOLD_CUTOFF: u8 = 80;
/// Output level for samples at or below the cutoff
pub const LEVEL_LOW: u8 = 0;
/// Output level for samples above the cutoff
pub const LEVEL_HIGH: u8 = 255;

/// Binarizes `raster`: `LEVEL_HIGH` where a sample exceeds the cutoff,
/// `LEVEL_LOW` elsewhere. Dimensions are preserved.
pub fn threshold(raster: &Raster) -> PgmResult<Raster> {
    let samples = raster.samples();
    let width = raster.width();
    Raster::from_fn(width, raster.height(), |row, col| {
        if samples[row * width + col] > THRESHOLD_CUTOFF {
            LEVEL_HIGH
        } else {
            LEVEL_LOW
        }
    })
}

/// Threshold transform, written to `threshold_<name>`
pub struct Threshold;

impl RasterTransform for Threshold {
    fn apply(&self, raster: &Raster) -> PgmResult<Raster> {
        threshold(raster)
    }

    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn output_prefix(&self) -> &'static str {
        "threshold_"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let raster = Raster::new(4, 1, vec![0, 80, 81, 255]).unwrap();
        let result = threshold(&raster).unwrap();
        assert_eq!(result.samples(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_scenario() {
        let raster = Raster::new(2, 2, vec![10, 90, 80, 81]).unwrap();
        let result = threshold(&raster).unwrap();
        assert_eq!(result.dimensions(), (2, 2));
        assert_eq!(result.samples(), &[0, 255, 0, 255]);
        // Input untouched
        assert_eq!(raster.samples(), &[10, 90, 80, 81]);
    }

    #[test]
    fn test_threshold_is_idempotent() {
        let raster = Raster::from_fn(16, 16, |row, col| (row * 16 + col) as u8).unwrap();
        let once = threshold(&raster).unwrap();
        let twice = threshold(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.dimensions(), raster.dimensions());
        assert!(once.samples().iter().all(|&v| v == LEVEL_LOW || v == LEVEL_HIGH));
    }
}
