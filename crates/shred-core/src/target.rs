//! Target resolution
//!
//! Validates that a path refers to an existing regular file and captures its
//! length. The length is read once and used for every pass of the operation.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A resolved file to be overwritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Path to the file
    pub path: PathBuf,

    /// Byte length at resolution time
    pub length: u64,
}

impl Target {
    /// Whether there is nothing to overwrite
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Resolve a path into a [`Target`]
///
/// Fails with [`Error::NotFound`] if the path is empty, cannot be statted
/// (including permission errors), or is not a regular file.
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Target> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
            reason: "empty path".to_string(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|e| Error::NotFound {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    let target = Target {
        path: path.to_path_buf(),
        length: metadata.len(),
    };

    tracing::info!("File {} found ({} bytes)", target.path.display(), target.length);
    Ok(target)
}
