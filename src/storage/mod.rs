//! Storage module for durable preferences and configuration.

pub mod backend;
pub mod config;
pub mod repository;

pub use backend::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use config::{AppConfig, BackendKind, ConfigError, LoggingSettings, StorageSettings};
pub use repository::{
    LoadSource, Loaded, PersistenceFailure, PreferencesRepository, WriteOutcome, PREFERENCES_KEY,
};
