//! Configuration module for songdb
//!
//! Manages the locations of the song store, playlist directory and queue file,
//! plus logging and output defaults. Configuration is stored in the user's
//! config directory and every key can be overridden by a `SONGDB_<KEY>`
//! environment variable.

use crate::playlist::queue::DEFAULT_MAX_LENGTH;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SongdbConfig {
    /// Song store directory
    pub database: PathBuf,

    /// Directory holding stored playlists and their metadata file
    pub playlist_directory: PathBuf,

    /// File the play queue is persisted to between runs
    pub queue_file: PathBuf,

    /// Maximum number of songs in the play queue
    pub max_queue_length: usize,

    /// Default `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for SongdbConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("songdb");

        Self {
            database: data_dir.join("songs.db"),
            playlist_directory: data_dir.join("playlists"),
            queue_file: data_dir.join("queue"),
            max_queue_length: DEFAULT_MAX_LENGTH,
            log_level: "songdb=info".to_string(),
            quiet: false,
        }
    }
}

impl SongdbConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("songdb").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default configuration");
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, layered over the defaults and under
    /// `SONGDB_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("SONGDB"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Path of the playlist metadata file inside the playlist directory
    #[must_use]
    pub fn playlist_meta_path(&self) -> PathBuf {
        self.playlist_directory.join("playlists.meta")
    }
}
