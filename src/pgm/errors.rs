//! Custom error types for PGM processing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while decoding, transforming, encoding or batching PGM files
#[derive(Debug)]
pub enum PgmError {
    /// Input file could not be opened
    NotFound { path: PathBuf, source: io::Error },
    /// Magic token or header does not describe a raw grayscale image
    InvalidFormat(String),
    /// Fewer sample bytes than the header dimensions require
    Truncated { expected: usize, actual: usize },
    /// Output file could not be created or written
    WriteError { path: PathBuf, source: io::Error },
    /// Batch directory could not be listed
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    /// Sample buffer could not be allocated
    AllocationFailed(usize),
    /// Invalid configuration file or command-line value
    Config(String),
    /// Unexpected I/O error while reading
    Io(io::Error),
}

impl fmt::Display for PgmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgmError::NotFound { path, source } => {
                write!(f, "Not found: cannot open {}: {}", path.display(), source)
            }
            PgmError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            PgmError::Truncated { expected, actual } => write!(
                f,
                "Truncated: expected {} sample bytes, found {}",
                expected, actual
            ),
            PgmError::WriteError { path, source } => {
                write!(f, "Write error: {}: {}", path.display(), source)
            }
            PgmError::DirectoryUnreadable { path, source } => write!(
                f,
                "Directory unreadable: {}: {}",
                path.display(),
                source
            ),
            PgmError::AllocationFailed(bytes) => {
                write!(f, "Allocation failed: unable to reserve {} bytes", bytes)
            }
            PgmError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PgmError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PgmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PgmError::NotFound { source, .. }
            | PgmError::WriteError { source, .. }
            | PgmError::DirectoryUnreadable { source, .. } => Some(source),
            PgmError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PgmError {
    fn from(error: io::Error) -> Self {
        PgmError::Io(error)
    }
}

/// Result type for PGM operations
pub type PgmResult<T> = Result<T, PgmError>;
