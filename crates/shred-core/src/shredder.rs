//! Multi-pass overwrite engine
//!
//! This module provides the core of shred, handling:
//! - Chunked random-fill writes across the whole file
//! - Sequential passes, each flushed to durable storage before the next
//! - Progress callbacks expressed over all passes combined
//!
//! The engine never changes the file length and never removes the file;
//! removal is a separate step ([`remove_target`]) selected by the caller.

use crate::config::ShredConfig;
use crate::error::{Error, OpenTarget, Result};
use crate::target::{resolve, Target};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// A write target that can force written data to durable storage
pub trait SyncTarget: Write + Seek {
    /// Persist previously written bytes
    fn sync(&mut self) -> std::io::Result<()>;
}

impl SyncTarget for File {
    fn sync(&mut self) -> std::io::Result<()> {
        self.sync_all()
    }
}

impl<T: SyncTarget + ?Sized> SyncTarget for &mut T {
    fn sync(&mut self) -> std::io::Result<()> {
        (**self).sync()
    }
}

/// Shred progress information
#[derive(Debug, Clone)]
pub struct ShredProgress {
    /// Current pass (1-based, 0 before the first pass starts)
    pub pass: u32,

    /// Total number of passes
    pub total_passes: u32,

    /// Bytes overwritten so far, across all passes
    pub bytes_written: u64,

    /// Bytes to overwrite across all passes (`length * passes`)
    pub total_bytes: u64,

    /// Elapsed time since start
    pub elapsed: Duration,
}

impl ShredProgress {
    /// Create a new progress instance
    pub fn new(length: u64, passes: u32) -> Self {
        Self {
            pass: 0,
            total_passes: passes,
            bytes_written: 0,
            total_bytes: length.saturating_mul(u64::from(passes)),
            elapsed: Duration::ZERO,
        }
    }

    /// Completion as a whole percentage in `[0, 100]`, rounded down
    pub fn percent(&self) -> u8 {
        if self.total_bytes == 0 {
            return 100;
        }
        let done = u128::from(self.bytes_written.min(self.total_bytes));
        (done * 100 / u128::from(self.total_bytes)) as u8
    }
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&ShredProgress) + Send + Sync>;

/// Result of a shred operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShredReport {
    /// Length of the target in bytes
    pub length: u64,

    /// Number of passes completed
    pub passes: u32,

    /// Number of chunk writes issued
    pub writes: u64,

    /// Number of durable flushes issued
    pub syncs: u32,

    /// Total bytes written across all passes
    pub bytes_written: u64,

    /// Total time elapsed
    pub elapsed: Duration,

    /// Average speed in bytes per second
    pub average_speed: u64,
}

impl ShredReport {
    /// Format average speed for display
    pub fn speed_display(&self) -> String {
        format_speed(self.average_speed)
    }
}

/// Overwrite engine
pub struct Shredder {
    config: ShredConfig,
    progress_callback: Option<ProgressCallback>,
}

impl Shredder {
    /// Create a new shredder with default configuration
    pub fn new() -> Self {
        Self::with_config(ShredConfig::default())
    }

    /// Create a new shredder with custom configuration
    pub fn with_config(config: ShredConfig) -> Self {
        Self {
            config,
            progress_callback: None,
        }
    }

    /// Set a progress callback, invoked after every chunk write
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ShredProgress) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &ShredConfig {
        &self.config
    }

    pub(crate) fn take_progress_callback(&mut self) -> Option<ProgressCallback> {
        self.progress_callback.take()
    }

    /// Overwrite the file at `path` with random data
    ///
    /// # Returns
    /// * `Ok(ShredReport)` - All passes written and flushed
    /// * `Err(Error)` - The first failure; the file may be partially overwritten
    pub fn shred<P: AsRef<Path>>(&self, path: P) -> Result<ShredReport> {
        let target = resolve(path)?;
        self.shred_target(&target)
    }

    /// Overwrite an already-resolved target
    pub fn shred_target(&self, target: &Target) -> Result<ShredReport> {
        self.config.validate()?;

        let start_time = Instant::now();
        let passes = self.config.passes;
        let mut progress = ShredProgress::new(target.length, passes);
        let mut writes = 0u64;
        let mut passes_done = 0u32;

        if target.is_empty() {
            tracing::debug!("{} is empty, nothing to overwrite", target.path.display());
        } else {
            for pass in 1..=passes {
                progress.pass = pass;
                tracing::debug!(
                    "Pass {}/{}: overwriting {} ({} bytes)",
                    pass,
                    passes,
                    target.path.display(),
                    target.length
                );

                let mut file = OpenOptions::new()
                    .write(true)
                    .open(&target.path)
                    .map_err(|source| Error::OpenFailed {
                        resource: OpenTarget::Target,
                        pass,
                        source,
                    })?;

                let mut random =
                    self.config
                        .random_source
                        .open()
                        .map_err(|source| Error::OpenFailed {
                            resource: OpenTarget::RandomSource,
                            pass,
                            source,
                        })?;

                writes += self.overwrite_pass(
                    &mut file,
                    &mut random,
                    pass,
                    target.length,
                    &mut progress,
                    start_time,
                )?;
                passes_done = pass;
            }
        }

        let elapsed = start_time.elapsed();
        let average_speed = average_speed(progress.bytes_written, elapsed);

        tracing::info!(
            "Shredded {} ({} bytes, {} passes)",
            target.path.display(),
            target.length,
            passes_done
        );

        Ok(ShredReport {
            length: target.length,
            passes: passes_done,
            writes,
            syncs: passes_done,
            bytes_written: progress.bytes_written,
            elapsed,
            average_speed,
        })
    }

    /// Run a single pass over `[0, length)` and flush it
    ///
    /// The final chunk is truncated to the remaining length, so nothing is
    /// ever written past `length`. Returns the number of chunk writes issued.
    pub(crate) fn overwrite_pass<W, R>(
        &self,
        target: &mut W,
        random: &mut R,
        pass: u32,
        length: u64,
        progress: &mut ShredProgress,
        start_time: Instant,
    ) -> Result<u64>
    where
        W: SyncTarget,
        R: Read,
    {
        let chunk_size = self.config.chunk_size;
        let buffer_len = usize::try_from(length).map_or(chunk_size, |l| l.min(chunk_size));
        let mut buffer = vec![0u8; buffer_len];
        let mut offset = 0u64;
        let mut writes = 0u64;

        while offset < length {
            let n = (length - offset).min(chunk_size as u64) as usize;
            let chunk = &mut buffer[..n];

            random
                .read_exact(chunk)
                .map_err(|source| Error::RandomSourceFailed {
                    pass,
                    offset,
                    source,
                })?;

            target
                .seek(SeekFrom::Start(offset))
                .map_err(|source| Error::SeekFailed {
                    pass,
                    offset,
                    source,
                })?;

            target
                .write_all(chunk)
                .map_err(|source| Error::WriteFailed {
                    pass,
                    offset,
                    source,
                })?;

            offset += n as u64;
            writes += 1;

            progress.bytes_written += n as u64;
            progress.elapsed = start_time.elapsed();

            if let Some(ref callback) = self.progress_callback {
                callback(progress);
            }
        }

        target
            .flush()
            .and_then(|()| target.sync())
            .map_err(|source| Error::SyncFailed { pass, source })?;

        Ok(writes)
    }
}

impl Default for Shredder {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite the file at `path` using the default configuration
pub fn shred<P: AsRef<Path>>(path: P) -> Result<ShredReport> {
    Shredder::new().shred(path)
}

/// Remove the directory entry of an overwritten file
///
/// This is not part of [`Shredder::shred`]; callers opt into it explicitly.
pub fn remove_target<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::remove_file(path).map_err(|source| Error::RemoveFailed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Removed {}", path.display());
    Ok(())
}

/// Bytes per second over `elapsed`, 0 when no measurable time has passed
fn average_speed(bytes: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (bytes as f64 / secs) as u64
    } else {
        0
    }
}

/// Format speed for display
pub fn format_speed(bytes_per_second: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes_per_second >= GB {
        format!("{:.1} GB/s", bytes_per_second as f64 / GB as f64)
    } else if bytes_per_second >= MB {
        format!("{:.1} MB/s", bytes_per_second as f64 / MB as f64)
    } else if bytes_per_second >= KB {
        format!("{:.1} KB/s", bytes_per_second as f64 / KB as f64)
    } else {
        format!("{} B/s", bytes_per_second)
    }
}

/// Format duration for display
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    if seconds >= 3600 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds > 0 {
        format!("{}s", seconds)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
