//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. A missing file
//! yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::backend::{FileStore, KeyValueStore, MemoryStore};

/// Default storage quota, matching the usual browser local storage limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Which key-value backend holds preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Files under the data directory (default)
    #[default]
    File,
    /// Process memory only; nothing survives a restart
    Memory,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::File => write!(f, "File"),
            BackendKind::Memory => write!(f, "Memory"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: get_data_dir(),
            storage: StorageSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl AppConfig {
    /// Directory the file backend writes to.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage
            .directory
            .clone()
            .unwrap_or_else(|| self.data_dir.join("local-storage"))
    }

    /// Build the configured key-value backend.
    pub fn open_backend(&self) -> Arc<dyn KeyValueStore> {
        match self.storage.backend {
            BackendKind::File => {
                let store = FileStore::new(self.storage_dir());
                match self.storage.quota_bytes {
                    Some(quota) => Arc::new(store.with_quota(quota)),
                    None => Arc::new(store),
                }
            }
            BackendKind::Memory => match self.storage.quota_bytes {
                Some(quota) => Arc::new(MemoryStore::with_quota(quota)),
                None => Arc::new(MemoryStore::new()),
            },
        }
    }
}

/// Storage-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend kind
    pub backend: BackendKind,
    /// Override for the file backend directory
    pub directory: Option<PathBuf>,
    /// Maximum stored bytes
    pub quota_bytes: Option<usize>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            directory: None,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }
}

/// Logging-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "flexidesk", "FlexiDesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path(), get_data_dir())
}

/// Load application configuration from `path`, using `data_dir` as the data directory.
pub fn load_config_from(path: &Path, data_dir: PathBuf) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
