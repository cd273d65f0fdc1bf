//! Configuration for shred operations

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Default number of overwrite passes
pub const DEFAULT_PASSES: u32 = 3;

/// Default chunk size (1 KB)
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Maximum number of overwrite passes
pub const MAX_PASSES: u32 = 100;

/// Maximum chunk size (64 MB)
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for a shred operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShredConfig {
    /// Number of full overwrite sweeps
    pub passes: u32,

    /// Bytes drawn and written per write operation
    pub chunk_size: usize,

    /// Where random bytes come from
    pub random_source: RandomSource,
}

impl Default for ShredConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            random_source: RandomSource::System,
        }
    }
}

impl ShredConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of passes
    pub fn passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    /// Set the chunk size
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the random source
    pub fn random_source(mut self, source: RandomSource) -> Self {
        self.random_source = source;
        self
    }

    /// Check that the configuration describes a runnable operation
    pub fn validate(&self) -> Result<()> {
        if self.passes == 0 {
            return Err(Error::InvalidConfig(
                "pass count must be at least 1".to_string(),
            ));
        }
        if self.passes > MAX_PASSES {
            return Err(Error::InvalidConfig(format!(
                "pass count {} exceeds maximum of {}",
                self.passes, MAX_PASSES
            )));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk size must be at least 1 byte".to_string(),
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::InvalidConfig(format!(
                "chunk size {} exceeds maximum of 64M",
                self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Parse a human-readable size (e.g., "1024", "4K", "1M")
///
/// Suffixes are binary multiples and case-insensitive. A trailing `B` is
/// accepted (`"4KB"`).
pub fn parse_size(s: &str) -> Result<usize> {
    let upper = s.trim().to_uppercase();
    let s = upper.strip_suffix('B').unwrap_or(upper.as_str());

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else {
        (s, 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("Invalid size: {}", s)))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| Error::InvalidConfig(format!("Size too large: {}", s)))
}
