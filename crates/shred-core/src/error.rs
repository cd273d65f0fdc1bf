//! Error types for the shred core library

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Resource the engine failed to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// The file being overwritten
    Target,
    /// The random-byte source
    RandomSource,
}

impl fmt::Display for OpenTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenTarget::Target => f.write_str("target"),
            OpenTarget::RandomSource => f.write_str("random source"),
        }
    }
}

/// Main error type for shred operations
#[derive(Error, Debug)]
pub enum Error {
    /// Target does not exist, cannot be statted, or is not a regular file
    #[error("Target not found: {path}: {reason}")]
    NotFound {
        /// Path that was resolved
        path: PathBuf,
        /// Why resolution failed
        reason: String,
    },

    /// Target or random source could not be opened
    #[error("Failed to open {resource} during pass {pass}: {source}")]
    OpenFailed {
        /// Which resource failed to open
        resource: OpenTarget,
        /// Pass number (1-based)
        pass: u32,
        /// The underlying error
        source: std::io::Error,
    },

    /// Random source could not supply the requested bytes
    #[error("Random source failed during pass {pass} at offset {offset}: {source}")]
    RandomSourceFailed {
        /// Pass number (1-based)
        pass: u32,
        /// Offset of the chunk being filled
        offset: u64,
        /// The underlying error
        source: std::io::Error,
    },

    /// Write cursor could not be positioned
    #[error("Seek failed during pass {pass} at offset {offset}: {source}")]
    SeekFailed {
        /// Pass number (1-based)
        pass: u32,
        /// Offset that was requested
        offset: u64,
        /// The underlying error
        source: std::io::Error,
    },

    /// Chunk could not be written
    #[error("Write failed during pass {pass} at offset {offset}: {source}")]
    WriteFailed {
        /// Pass number (1-based)
        pass: u32,
        /// Offset of the chunk
        offset: u64,
        /// The underlying error
        source: std::io::Error,
    },

    /// Written data could not be flushed to storage
    #[error("Sync failed after pass {pass}: {source}")]
    SyncFailed {
        /// Pass number (1-based)
        pass: u32,
        /// The underlying error
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Removing the directory entry after overwriting failed
    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        /// Path that could not be removed
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// Background worker thread could not be started
    #[error("Failed to start shred worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    /// Background worker ended without reporting an outcome
    #[error("Shred worker terminated unexpectedly")]
    WorkerPanicked,
}

/// Result type alias using the shred error type
pub type Result<T> = std::result::Result<T, Error>;
