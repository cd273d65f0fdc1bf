//! Persistent user settings for shred
//!
//! Settings are stored in a TOML configuration file at:
//! - Linux/macOS: `~/.config/shred/shred_config.toml`
//! - Windows: `%APPDATA%\shred\shred_config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! [shred]
//! passes = 3
//! chunk_size = "1K"
//! random_source = "system"
//! remove = false
//!
//! [behavior]
//! skip_confirmation = false
//! quiet = false
//! ```

use crate::config::{parse_size, ShredConfig, DEFAULT_PASSES};
use crate::error::Result;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "shred_config.toml";

/// Application name for config directory
const APP_NAME: &str = "shred";

/// Default chunk size string
const DEFAULT_CHUNK_SIZE_STR: &str = "1K";

/// User settings loaded from configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Shred operation settings
    pub shred: ShredSettings,

    /// Behavior settings
    pub behavior: BehaviorSettings,
}

/// Settings for shred operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShredSettings {
    /// Number of overwrite passes
    pub passes: u32,

    /// Chunk size (e.g., "1K", "64K", "1M")
    pub chunk_size: String,

    /// Random source: "system" or a path such as "/dev/urandom"
    pub random_source: String,

    /// Whether to remove the file after overwriting
    pub remove: bool,
}

/// General behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Whether to skip confirmation prompts by default
    pub skip_confirmation: bool,

    /// Whether to suppress non-error output
    pub quiet: bool,
}

impl Default for ShredSettings {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            chunk_size: DEFAULT_CHUNK_SIZE_STR.to_string(),
            random_source: RandomSource::System.to_string(),
            remove: false,
        }
    }
}

impl ShredSettings {
    /// Convert to a runtime [`ShredConfig`], validating the values
    pub fn to_shred_config(&self) -> Result<ShredConfig> {
        let random_source = self
            .random_source
            .parse::<RandomSource>()
            .unwrap_or_default();
        let config = ShredConfig::new()
            .passes(self.passes)
            .chunk_size(parse_size(&self.chunk_size)?)
            .random_source(random_source);
        config.validate()?;
        Ok(config)
    }
}

impl Settings {
    /// Load settings from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config path available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => {
                    tracing::debug!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to a specific path
    pub fn save_to_path(&self, path: Option<PathBuf>) -> std::result::Result<PathBuf, SettingsError> {
        let path = path.ok_or(SettingsError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(self).map_err(SettingsError::Serialize)?;

        std::fs::write(&path, contents).map_err(|e| SettingsError::Io {
            path: path.clone(),
            source: e,
        })?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(path)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Errors that can occur when working with settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No configuration directory available
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Failed to read or write config file
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path that caused the error
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),
}
