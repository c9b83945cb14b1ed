//! Constants for the raw PGM format

/// Magic token identifying a binary (raw) grayscale PGM
pub const MAGIC: [u8; 2] = *b"P5";

/// Maximum sample value written to every encoded header
pub const MAX_VALUE: u8 = 255;

/// File extension selected by default
pub const DEFAULT_EXTENSION: &str = "pgm";
