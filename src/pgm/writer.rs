//! PGM (P5) encoder

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::pgm::constants::{MAGIC, MAX_VALUE};
use crate::pgm::errors::{PgmError, PgmResult};
use crate::pgm::raster::Raster;

/// Writes `raster` to `path`, creating or truncating the file
///
/// # Arguments
/// * `path` - Destination file
/// * `raster` - Raster to encode
///
/// # Returns
/// `WriteError` if the file cannot be created or any write fails
pub fn encode<P: AsRef<Path>>(path: P, raster: &Raster) -> PgmResult<()> {
    let path = path.as_ref();
    let write_error = |source| PgmError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    encode_to(&mut writer, raster).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    debug!(
        "Wrote {} ({}x{})",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(())
}

/// Writes the header and samples of `raster` to any writer
pub fn encode_to<W: Write>(writer: &mut W, raster: &Raster) -> std::io::Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(b"\n")?;
    write!(writer, "{} {}\n{}\n", raster.width(), raster.height(), MAX_VALUE)?;
    writer.write_all(raster.samples())
}
