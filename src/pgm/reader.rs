//! PGM (P5) decoder
//!
//! Reads the ASCII header and the raw sample block of a binary grayscale
//! PGM file into a fully materialized `Raster`.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::pgm::constants::MAGIC;
use crate::pgm::errors::{PgmError, PgmResult};
use crate::pgm::raster::{allocate_samples, sample_count, Raster};

/// Upper bound on the sample buffer reserved before any data is read
const INITIAL_RESERVE: usize = 1 << 20;

/// Header fields preceding the sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgmHeader {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Declared maximum sample value, accepted as-is
    pub max_value: usize,
}

/// Decodes the PGM file at `path`
///
/// # Arguments
/// * `path` - File to read
///
/// # Returns
/// The decoded raster, `NotFound` if the file cannot be opened, or any
/// error produced by `decode_from`
pub fn decode<P: AsRef<Path>>(path: P) -> PgmResult<Raster> {
    let path = path.as_ref();
    let not_found = |source| PgmError::NotFound {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(not_found)?;
    if file.metadata().map_err(not_found)?.is_dir() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::InvalidInput,
            "is a directory",
        )));
    }

    debug!("Decoding {}", path.display());
    decode_from(BufReader::new(file))
}

/// Decodes a PGM image from any buffered reader
///
/// Bytes following the last sample are left unread. The sample buffer
/// grows with the data actually present, so a header declaring more samples
/// than the stream holds fails as `Truncated`.
pub fn decode_from<R: BufRead>(mut reader: R) -> PgmResult<Raster> {
    let header = read_header(&mut reader)?;
    debug!(
        "PGM header: {}x{}, max value {}",
        header.width, header.height, header.max_value
    );

    let expected = sample_count(header.width, header.height)?;
    let mut samples = allocate_samples(expected.min(INITIAL_RESERVE))?;
    let actual = reader.take(expected as u64).read_to_end(&mut samples)?;
    if actual < expected {
        return Err(PgmError::Truncated { expected, actual });
    }

    Raster::new(header.width, header.height, samples)
}

/// Reads the magic token, dimensions and max value
///
/// Consumes exactly one whitespace byte after the max value, leaving the
/// reader positioned on the first sample.
pub fn read_header<R: BufRead>(reader: &mut R) -> PgmResult<PgmHeader> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(|_| {
        PgmError::InvalidFormat("file too short for a magic token".to_string())
    })?;
    if magic != MAGIC {
        return Err(PgmError::InvalidFormat(format!(
            "expected magic {:?}, found {:?}",
            String::from_utf8_lossy(&MAGIC),
            String::from_utf8_lossy(&magic)
        )));
    }

    let width = read_decimal(reader, "width")?;
    let height = read_decimal(reader, "height")?;
    if width == 0 || height == 0 {
        return Err(PgmError::InvalidFormat(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let max_value = read_decimal(reader, "max value")?;

    // Exactly one separator byte before the raster
    match next_byte(reader)? {
        Some(b) if b.is_ascii_whitespace() => {}
        _ => {
            return Err(PgmError::InvalidFormat(
                "max value must be followed by a single whitespace byte".to_string(),
            ))
        }
    }

    Ok(PgmHeader {
        width,
        height,
        max_value,
    })
}

/// Skips leading whitespace and parses an unsigned decimal token
fn read_decimal<R: BufRead>(reader: &mut R, field: &str) -> PgmResult<usize> {
    while let Some(b) = peek_byte(reader)? {
        if !b.is_ascii_whitespace() {
            break;
        }
        reader.consume(1);
    }

    let mut value: usize = 0;
    let mut digits = 0;
    while let Some(b) = peek_byte(reader)? {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(usize::from(b - b'0')))
            .ok_or_else(|| PgmError::InvalidFormat(format!("{} is too large", field)))?;
        digits += 1;
        reader.consume(1);
    }

    if digits == 0 {
        return Err(PgmError::InvalidFormat(format!(
            "{} is missing or not a decimal integer",
            field
        )));
    }
    Ok(value)
}

fn peek_byte<R: BufRead>(reader: &mut R) -> PgmResult<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

fn next_byte<R: BufRead>(reader: &mut R) -> PgmResult<Option<u8>> {
    let b = peek_byte(reader)?;
    if b.is_some() {
        reader.consume(1);
    }
    Ok(b)
}
