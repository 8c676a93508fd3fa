//! Preferences store.
//!
//! The single owner of the current [`AccessibilityPreferences`]. Consumers
//! read through [`PreferencesStore::preferences`] or a subscription and
//! change values only through the store's operations.

use crossbeam::channel::{unbounded, Receiver, Sender};

use super::types::{AccessibilityPreferences, AudioSpeed, FontSize, PreferenceChange, Theme};
use crate::appearance::AppearanceApplier;
use crate::storage::{AppConfig, LoadSource, PreferencesRepository};

/// Holds the current preferences and applies updates.
///
/// Updates change memory only. [`save_current_preferences`] and
/// [`reset_to_defaults`] are the only operations that write storage.
///
/// [`save_current_preferences`]: PreferencesStore::save_current_preferences
/// [`reset_to_defaults`]: PreferencesStore::reset_to_defaults
pub struct PreferencesStore {
    current: AccessibilityPreferences,
    repository: PreferencesRepository,
    appearance: Box<dyn AppearanceApplier>,
    subscribers: Vec<Sender<AccessibilityPreferences>>,
}

impl std::fmt::Debug for PreferencesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesStore")
            .field("current", &self.current)
            .field("repository", &self.repository)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl PreferencesStore {
    /// Create a store holding the defaults. Call [`initialize`](Self::initialize)
    /// to adopt the persisted value.
    pub fn new(
        repository: PreferencesRepository,
        appearance: impl AppearanceApplier + 'static,
    ) -> Self {
        Self {
            current: AccessibilityPreferences::default(),
            repository,
            appearance: Box::new(appearance),
            subscribers: Vec::new(),
        }
    }

    /// Create and initialize a store in one step.
    pub fn open(
        repository: PreferencesRepository,
        appearance: impl AppearanceApplier + 'static,
    ) -> Self {
        let mut store = Self::new(repository, appearance);
        store.initialize();
        store
    }

    /// Create and initialize a store over the backend `config` selects.
    pub fn from_config(config: &AppConfig, appearance: impl AppearanceApplier + 'static) -> Self {
        tracing::info!("Opening preferences store ({} backend)", config.storage.backend);
        Self::open(PreferencesRepository::new(config.open_backend()), appearance)
    }

    /// Adopt the persisted preferences, or the defaults if none can be read,
    /// and apply them to the environment.
    ///
    /// A corrupt stored value is left in place; it is overwritten by the next save.
    pub fn initialize(&mut self) -> AccessibilityPreferences {
        let loaded = self.repository.load_with_source();
        match &loaded.source {
            LoadSource::Stored => tracing::info!("Loaded saved accessibility preferences"),
            LoadSource::Missing => {
                tracing::info!("No saved accessibility preferences, using defaults")
            }
            LoadSource::Fallback(_) => {
                tracing::warn!("Saved accessibility preferences unreadable, using defaults")
            }
        }

        self.current = loaded.preferences;
        self.appearance.apply_all(&self.current);
        self.broadcast();
        self.current
    }

    /// The current preferences.
    pub fn preferences(&self) -> AccessibilityPreferences {
        self.current
    }

    /// The persistence adapter.
    pub fn repository(&self) -> &PreferencesRepository {
        &self.repository
    }

    /// Receive every value the store adopts from now on.
    pub fn subscribe(&mut self) -> Receiver<AccessibilityPreferences> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Apply a single-field change.
    pub fn update(&mut self, change: PreferenceChange) -> AccessibilityPreferences {
        self.current = self.current.apply(change);

        match change {
            PreferenceChange::Theme(theme) => self.appearance.apply_theme(theme),
            PreferenceChange::FontSize(size) => self.appearance.apply_font_size(size),
            PreferenceChange::AudioSpeed(_) | PreferenceChange::ContrastMode(_) => {}
        }

        tracing::debug!("Preference updated: {:?}", change);
        self.broadcast();
        self.current
    }

    pub fn update_theme(&mut self, theme: Theme) -> AccessibilityPreferences {
        self.update(PreferenceChange::Theme(theme))
    }

    pub fn update_font_size(&mut self, size: FontSize) -> AccessibilityPreferences {
        self.update(PreferenceChange::FontSize(size))
    }

    pub fn update_audio_speed(&mut self, speed: AudioSpeed) -> AccessibilityPreferences {
        self.update(PreferenceChange::AudioSpeed(speed))
    }

    pub fn update_contrast_mode(&mut self, enabled: bool) -> AccessibilityPreferences {
        self.update(PreferenceChange::ContrastMode(enabled))
    }

    /// Persist the current preferences. Storage failures are logged and ignored.
    pub fn save_current_preferences(&self) {
        self.repository.save(&self.current);
    }

    /// Restore the defaults, apply them, and persist them immediately.
    pub fn reset_to_defaults(&mut self) -> AccessibilityPreferences {
        self.current = AccessibilityPreferences::default();
        self.appearance.apply_all(&self.current);
        self.repository.save(&self.current);

        tracing::info!("Accessibility preferences reset to defaults");
        self.broadcast();
        self.current
    }

    /// Send the current value to subscribers, dropping any that hung up.
    fn broadcast(&mut self) {
        let current = self.current;
        self.subscribers.retain(|tx| tx.send(current).is_ok());
    }
}
