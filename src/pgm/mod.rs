//! Raw PGM (P5) format module
//!
//! This module provides the in-memory raster model together with the
//! decoder and encoder for binary grayscale PGM files.

pub mod errors;
pub mod raster;
pub mod reader;
pub mod writer;
pub(crate) mod constants;
mod tests;

pub use constants::{DEFAULT_EXTENSION, MAGIC, MAX_VALUE};
pub use errors::{PgmError, PgmResult};
pub use raster::Raster;
pub use reader::{decode, decode_from, PgmHeader};
pub use writer::{encode, encode_to};
