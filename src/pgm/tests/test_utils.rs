use crate::pgm::raster::Raster;

/// Builds an encoded P5 buffer from raw parts
pub fn p5_bytes(width: usize, height: usize, max_value: u32, samples: &[u8]) -> Vec<u8> {
    let mut buffer = format!("P5\n{} {}\n{}\n", width, height, max_value).into_bytes();
    buffer.extend_from_slice(samples);
    buffer
}

/// Raster whose samples count upwards from `start`, wrapping at 256
pub fn gradient_raster(width: usize, height: usize, start: u8) -> Raster {
    Raster::from_fn(width, height, |row, col| {
        start.wrapping_add((row * width + col) as u8)
    })
    .unwrap()
}
