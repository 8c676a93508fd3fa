//! Integration tests for the preferences store and its persistence contract.
//!
//! Tests the store against real backends, including:
//! - Reset writing through while plain updates stay in memory
//! - Explicit save
//! - Surviving a restart with the file backend
//! - Storage failures leaving memory and disk untouched

use std::sync::Arc;

use flexidesk::appearance::{AttributeAppearance, FONT_SIZE_ATTRIBUTE, THEME_ATTRIBUTE};
use flexidesk::preferences::{
    AccessibilityPreferences, AudioSpeed, FontSize, PreferencesStore, Theme,
};
use flexidesk::storage::{
    AppConfig, BackendKind, FileStore, KeyValueStore, MemoryStore, PreferencesRepository,
    PREFERENCES_KEY,
};
use flexidesk::NoopAppearance;
use tempfile::TempDir;

fn memory_store() -> (Arc<MemoryStore>, PreferencesStore) {
    let backend = Arc::new(MemoryStore::new());
    let store = PreferencesStore::open(PreferencesRepository::new(backend.clone()), NoopAppearance);
    (backend, store)
}

#[test]
fn test_fresh_store_starts_with_defaults() {
    let (backend, store) = memory_store();

    assert_eq!(store.preferences(), AccessibilityPreferences::default());
    // Initializing does not write anything
    assert!(backend.is_empty());
}

#[test]
fn test_update_font_size_isolated() {
    let (_backend, mut store) = memory_store();
    store.update_theme(Theme::Dark);
    store.update_font_size(FontSize::Small);
    store.update_audio_speed(AudioSpeed::Faster);
    store.update_contrast_mode(true);

    let next = store.update_font_size(FontSize::Large);

    assert_eq!(
        next,
        AccessibilityPreferences {
            theme: Theme::Dark,
            font_size: FontSize::Large,
            audio_speed: AudioSpeed::Faster,
            contrast_mode: true,
        }
    );
    assert_eq!(store.preferences(), next);
}

#[test]
fn test_reset_writes_through() {
    let (_backend, mut store) = memory_store();
    store.update_theme(Theme::HighContrast);
    store.update_font_size(FontSize::Large);
    store.update_contrast_mode(true);
    store.save_current_preferences();

    let reset = store.reset_to_defaults();

    assert_eq!(reset, AccessibilityPreferences::default());
    assert_eq!(store.preferences(), AccessibilityPreferences::default());
    assert_eq!(store.repository().load(), AccessibilityPreferences::default());
}

#[test]
fn test_plain_update_is_not_persisted() {
    let (_backend, mut store) = memory_store();
    store.update_audio_speed(AudioSpeed::Slow);
    store.save_current_preferences();

    store.update_audio_speed(AudioSpeed::Fast);

    assert_eq!(store.repository().load().audio_speed, AudioSpeed::Slow);
    assert_eq!(store.preferences().audio_speed, AudioSpeed::Fast);
}

#[test]
fn test_save_is_explicit() {
    let (backend, mut store) = memory_store();
    store.update_theme(Theme::Dark);
    store.update_font_size(FontSize::Small);
    store.update_audio_speed(AudioSpeed::Faster);
    store.update_contrast_mode(true);

    assert_eq!(backend.get(PREFERENCES_KEY).unwrap(), None);

    store.save_current_preferences();
    assert_eq!(store.repository().load(), store.preferences());
}

#[test]
fn test_repeated_save_writes_same_text() {
    let (backend, mut store) = memory_store();
    store.update_theme(Theme::Dark);

    store.save_current_preferences();
    let first = backend.get(PREFERENCES_KEY).unwrap();
    store.save_current_preferences();
    let second = backend.get(PREFERENCES_KEY).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_failed_save_keeps_prior_state() {
    let (backend, mut store) = memory_store();
    store.update_theme(Theme::Dark);
    store.save_current_preferences();
    let persisted = backend.get(PREFERENCES_KEY).unwrap();

    store.update_theme(Theme::Light);
    backend.set_available(false);
    store.save_current_preferences();
    let reset = store.reset_to_defaults();
    backend.set_available(true);

    assert_eq!(reset, AccessibilityPreferences::default());
    assert_eq!(backend.get(PREFERENCES_KEY).unwrap(), persisted);
}

#[test]
fn test_unavailable_storage_at_startup() {
    let backend = Arc::new(MemoryStore::new());
    backend.set_available(false);

    let attributes = AttributeAppearance::new();
    let mut store = PreferencesStore::new(PreferencesRepository::new(backend), attributes.clone());

    assert_eq!(store.initialize(), AccessibilityPreferences::default());
    assert_eq!(attributes.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(attributes.attribute(FONT_SIZE_ATTRIBUTE).as_deref(), Some("medium"));
}

#[test]
fn test_reset_reapplies_appearance() {
    let backend = Arc::new(MemoryStore::new());
    let attributes = AttributeAppearance::new();
    let mut store = PreferencesStore::open(PreferencesRepository::new(backend), attributes.clone());

    store.update_theme(Theme::HighContrast);
    store.update_font_size(FontSize::Large);
    assert_eq!(attributes.attribute(THEME_ATTRIBUTE).as_deref(), Some("high-contrast"));

    store.reset_to_defaults();
    assert_eq!(attributes.attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(attributes.attribute(FONT_SIZE_ATTRIBUTE).as_deref(), Some("medium"));
}

#[test]
fn test_file_backend_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let repo = PreferencesRepository::new(Arc::new(FileStore::new(dir.path())));
        let mut store = PreferencesStore::open(repo, NoopAppearance);
        store.update_theme(Theme::HighContrast);
        store.update_audio_speed(AudioSpeed::Fast);
        store.save_current_preferences();
        // Unsaved change is lost on restart
        store.update_contrast_mode(true);
    }

    let repo = PreferencesRepository::new(Arc::new(FileStore::new(dir.path())));
    let store = PreferencesStore::open(repo, NoopAppearance);

    assert_eq!(
        store.preferences(),
        AccessibilityPreferences {
            theme: Theme::HighContrast,
            font_size: FontSize::Medium,
            audio_speed: AudioSpeed::Fast,
            contrast_mode: false,
        }
    );
}

#[test]
fn test_store_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    config.storage.backend = BackendKind::File;

    {
        let mut store = PreferencesStore::from_config(&config, NoopAppearance);
        store.update_font_size(FontSize::Small);
        store.save_current_preferences();
    }

    assert!(config.storage_dir().join(PREFERENCES_KEY).exists());
    let store = PreferencesStore::from_config(&config, NoopAppearance);
    assert_eq!(store.preferences().font_size, FontSize::Small);
}
