//! Durable read/write of the preferences value.
//!
//! The repository owns one key of a [`KeyValueStore`]. Its public `save`,
//! `load` and `clear` never fail: write failures are logged and discarded,
//! read failures fall back to the default preferences. The fallible
//! `try_*` forms are exposed for callers that want the error.

use std::sync::Arc;

use super::backend::{KeyValueStore, StorageError};
use crate::preferences::AccessibilityPreferences;

/// Storage key for the preferences value.
pub const PREFERENCES_KEY: &str = "accessibility-preferences";

/// A persistence failure, by direction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersistenceFailure {
    #[error("Failed to write preferences: {0}")]
    Write(#[source] StorageError),

    #[error("Failed to read preferences: {0}")]
    Read(#[source] StorageError),
}

/// Result of a write that is not allowed to fail.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// The backend accepted the write
    Written,
    /// The write failed; the failure was logged and dropped
    Discarded(PersistenceFailure),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}

/// Where a loaded value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadSource {
    /// Parsed from storage
    Stored,
    /// Nothing stored; defaults used
    Missing,
    /// Storage or parsing failed; defaults used
    Fallback(PersistenceFailure),
}

/// A loaded preferences value together with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub preferences: AccessibilityPreferences,
    pub source: LoadSource,
}

/// Persistence adapter for [`AccessibilityPreferences`].
#[derive(Clone)]
pub struct PreferencesRepository {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PreferencesRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesRepository")
            .field("key", &PREFERENCES_KEY)
            .finish_non_exhaustive()
    }
}

impl PreferencesRepository {
    /// Create a repository over a shared backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// The backend this repository writes to.
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    /// Serialize and write `preferences`.
    pub fn try_save(&self, preferences: &AccessibilityPreferences) -> Result<(), StorageError> {
        let text = serde_json::to_string(preferences)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(PREFERENCES_KEY, &text)
    }

    /// Read and parse the stored value, `None` if nothing is stored.
    pub fn try_load(&self) -> Result<Option<AccessibilityPreferences>, StorageError> {
        let Some(text) = self.backend.get(PREFERENCES_KEY)? else {
            return Ok(None);
        };

        let preferences =
            serde_json::from_str(&text).map_err(|e| StorageError::Parse(e.to_string()))?;
        Ok(Some(preferences))
    }

    /// Remove the stored value.
    pub fn try_clear(&self) -> Result<(), StorageError> {
        self.backend.remove(PREFERENCES_KEY)
    }

    /// Write `preferences`, discarding any failure.
    pub fn save(&self, preferences: &AccessibilityPreferences) -> WriteOutcome {
        match self.try_save(preferences) {
            Ok(()) => {
                tracing::debug!("Saved accessibility preferences");
                WriteOutcome::Written
            }
            Err(e) => discard_write_failure("save", e),
        }
    }

    /// Load the stored value, or the defaults if none can be read.
    pub fn load(&self) -> AccessibilityPreferences {
        self.load_with_source().preferences
    }

    /// Load the stored value and report where it came from.
    pub fn load_with_source(&self) -> Loaded {
        match self.try_load() {
            Ok(Some(preferences)) => Loaded {
                preferences,
                source: LoadSource::Stored,
            },
            Ok(None) => Loaded {
                preferences: AccessibilityPreferences::default(),
                source: LoadSource::Missing,
            },
            Err(e) => fallback_to_defaults(e),
        }
    }

    /// Remove the stored value, discarding any failure.
    pub fn clear(&self) -> WriteOutcome {
        match self.try_clear() {
            Ok(()) => WriteOutcome::Written,
            Err(e) => discard_write_failure("clear", e),
        }
    }
}

/// Log a failed write and drop it. Storage keeps whatever it held before.
fn discard_write_failure(operation: &str, error: StorageError) -> WriteOutcome {
    tracing::error!("Failed to {} preferences: {}", operation, error);
    WriteOutcome::Discarded(PersistenceFailure::Write(error))
}

/// Log a failed read and substitute the defaults. Partially readable data is
/// not salvaged.
fn fallback_to_defaults(error: StorageError) -> Loaded {
    tracing::error!("Failed to load preferences, using defaults: {}", error);
    Loaded {
        preferences: AccessibilityPreferences::default(),
        source: LoadSource::Fallback(PersistenceFailure::Read(error)),
    }
}
