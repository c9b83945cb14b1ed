//! In-memory grayscale raster
//!
//! A `Raster` owns a row-major buffer of 8-bit samples. It is immutable once
//! built: every transform allocates a fresh buffer for its result.

use crate::pgm::errors::{PgmError, PgmResult};

/// Owned 8-bit grayscale sample grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl Raster {
    /// Creates a raster from row-major samples
    ///
    /// # Arguments
    /// * `width` - Number of columns, must be positive
    /// * `height` - Number of rows, must be positive
    /// * `samples` - Exactly `width * height` sample values
    ///
    /// # Returns
    /// The raster, or `InvalidFormat` if the dimensions and buffer disagree
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> PgmResult<Self> {
        let expected = sample_count(width, height)?;
        if samples.len() != expected {
            return Err(PgmError::InvalidFormat(format!(
                "raster {}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                samples.len()
            )));
        }

        Ok(Raster {
            width,
            height,
            samples,
        })
    }

    /// Builds a raster by evaluating `f(row, col)` for every position
    ///
    /// The buffer is reserved up front, so an allocation failure is reported
    /// as `AllocationFailed` instead of aborting the process.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> PgmResult<Self>
    where
        F: FnMut(usize, usize) -> u8,
    {
        let count = sample_count(width, height)?;
        let mut samples = allocate_samples(count)?;
        for row in 0..height {
            for col in 0..width {
                samples.push(f(row, col));
            }
        }

        Ok(Raster {
            width,
            height,
            samples,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// All samples in row-major order
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Sample at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.samples[row * self.width + col])
        } else {
            None
        }
    }

    /// Samples of a single row
    ///
    /// # Panics
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.samples[start..start + self.width]
    }

    /// Consumes the raster and returns its sample buffer
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

/// Validates dimensions and returns `width * height`
pub(crate) fn sample_count(width: usize, height: usize) -> PgmResult<usize> {
    if width == 0 || height == 0 {
        return Err(PgmError::InvalidFormat(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    width.checked_mul(height).ok_or_else(|| {
        PgmError::InvalidFormat(format!("dimensions {}x{} overflow", width, height))
    })
}

/// Reserves an empty buffer with room for exactly `count` samples
pub(crate) fn allocate_samples(count: usize) -> PgmResult<Vec<u8>> {
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| PgmError::AllocationFailed(count))?;
    Ok(samples)
}
