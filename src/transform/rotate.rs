//! Quarter-turn rotation

use crate::pgm::errors::PgmResult;
use crate::pgm::raster::Raster;
use super::handler::RasterTransform;

/// Rotates `raster` by 90 degrees
///
/// The result has its dimensions swapped and
/// `out[row][col] = in[in_height - 1 - col][row]`, i.e. a clockwise turn.
pub fn rotate90(raster: &Raster) -> PgmResult<Raster> {
    let (in_width, in_height) = raster.dimensions();
    let samples = raster.samples();
    Raster::from_fn(in_height, in_width, |row, col| {
        samples[(in_height - 1 - col) * in_width + row]
    })
}

/// Rotation transform, written to `rotate_<name>`
pub struct Rotate90;

impl RasterTransform for Rotate90 {
    fn apply(&self, raster: &Raster) -> PgmResult<Raster> {
        rotate90(raster)
    }

    fn name(&self) -> &'static str {
        "Rotate 90"
    }

    fn output_prefix(&self) -> &'static str {
        "rotate_"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_scenario() {
        let raster = Raster::new(2, 2, vec![10, 90, 80, 81]).unwrap();
        let rotated = rotate90(&raster).unwrap();
        assert_eq!(rotated.dimensions(), (2, 2));
        assert_eq!(rotated.samples(), &[80, 10, 81, 90]);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        // 3 wide, 2 tall:
        // 1 2 3
        // 4 5 6
        let raster = Raster::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rotated = rotate90(&raster).unwrap();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(rotated.samples(), &[4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_four_rotations_restore_raster() {
        for (width, height) in [(1, 1), (1, 5), (4, 3), (9, 2)] {
            let raster = Raster::from_fn(width, height, |row, col| (row * 31 + col * 7) as u8).unwrap();
            let mut current = raster.clone();
            for _ in 0..4 {
                let next = rotate90(&current).unwrap();
                assert_eq!(next.width(), current.height());
                assert_eq!(next.height(), current.width());
                current = next;
            }
            assert_eq!(current, raster);
        }
    }
}
