//! Tests for the raster model

use crate::pgm::errors::PgmError;
use crate::pgm::raster::Raster;

#[test]
fn test_raster_creation() {
    let raster = Raster::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(raster.dimensions(), (3, 2));
    assert_eq!(raster.row(0), &[1, 2, 3]);
    assert_eq!(raster.row(1), &[4, 5, 6]);
    assert_eq!(raster.get(1, 2), Some(6));
    assert_eq!(raster.get(2, 0), None);
    assert_eq!(raster.get(0, 3), None);
}

#[test]
fn test_raster_rejects_mismatched_buffer() {
    let result = Raster::new(2, 2, vec![0; 3]);
    assert!(matches!(result, Err(PgmError::InvalidFormat(_))));
}

#[test]
fn test_raster_rejects_zero_dimensions() {
    assert!(matches!(Raster::new(0, 4, Vec::new()), Err(PgmError::InvalidFormat(_))));
    assert!(matches!(Raster::new(4, 0, Vec::new()), Err(PgmError::InvalidFormat(_))));
    assert!(Raster::from_fn(0, 1, |_, _| 0).is_err());
}

#[test]
fn test_raster_rejects_overflowing_dimensions() {
    let result = Raster::from_fn(usize::MAX, 2, |_, _| 0);
    assert!(matches!(result, Err(PgmError::InvalidFormat(_))));
}

#[test]
fn test_from_fn_is_row_major() {
    let raster = Raster::from_fn(3, 2, |row, col| (row * 10 + col) as u8).unwrap();
    assert_eq!(raster.samples(), &[0, 1, 2, 10, 11, 12]);
    assert_eq!(raster.into_samples().len(), 6);
}
