//! # Shred Core
//!
//! Core library that overwrites a file's contents in place with random data,
//! over several passes, so the previous bytes cannot be read back through the
//! filesystem.
//!
//! ## Modules
//!
//! - `target`: Resolves a path into an existing file and its length
//! - `shredder`: Multi-pass overwrite engine with progress callbacks
//! - `handle`: Runs the engine on a worker thread and yields progress events
//! - `random`: Random-byte sources
//! - `error`: Error types and result aliases
//! - `config`: Runtime configuration
//! - `settings`: Persistent user settings from configuration file
//!
//! ## Example
//!
//! ```no_run
//! use shred_core::{ShredConfig, ShredEvent, Shredder};
//!
//! let config = ShredConfig::new().passes(3).chunk_size(4096);
//!
//! let mut handle = Shredder::with_config(config).spawn("secret.txt")?;
//! while let Some(event) = handle.next_event() {
//!     match event {
//!         ShredEvent::Progress(p) => print!("\rShredding secret.txt ({}%)", p),
//!         ShredEvent::Finished(result) => {
//!             let report = result?;
//!             println!("\n{} writes in {} passes", report.writes, report.passes);
//!         }
//!     }
//! }
//! # Ok::<(), shred_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handle;
pub mod random;
pub mod settings;
pub mod shredder;
pub mod target;

pub use config::{
    parse_size, ShredConfig, DEFAULT_CHUNK_SIZE, DEFAULT_PASSES, MAX_CHUNK_SIZE, MAX_PASSES,
};
pub use error::{Error, OpenTarget, Result};
pub use handle::{ShredEvent, ShredHandle};
pub use random::{RandomSource, RandomStream};
pub use settings::{BehaviorSettings, Settings, SettingsError, ShredSettings};
pub use shredder::{
    format_duration, format_speed, remove_target, shred, ProgressCallback, ShredProgress,
    ShredReport, Shredder, SyncTarget,
};
pub use target::{resolve, Target};
