//! Integration tests for the first-run flow.

use std::sync::Arc;

use flexidesk::onboarding::{OnboardingFlag, Page, SetupStatus, SetupStep, SetupWizard};
use flexidesk::preferences::{
    AccessibilityPreferences, AudioSpeed, FontSize, PreferencesStore, Theme,
};
use flexidesk::storage::{FileStore, KeyValueStore, PreferencesRepository};
use flexidesk::NoopAppearance;
use tempfile::TempDir;

fn open(backend: Arc<dyn KeyValueStore>) -> (OnboardingFlag, PreferencesStore) {
    let flag = OnboardingFlag::new(backend.clone());
    let store = PreferencesStore::open(PreferencesRepository::new(backend), NoopAppearance);
    (flag, store)
}

#[test]
fn test_first_run_then_restart() {
    let dir = TempDir::new().unwrap();
    let backend: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));

    {
        let (flag, mut store) = open(backend.clone());
        assert_eq!(Page::at_startup(&flag), Page::Onboarding);

        let mut wizard = SetupWizard::new(flag.clone());
        assert_eq!(wizard.next(&store), SetupStatus::InProgress(SetupStep::Theme));
        store.update_theme(Theme::Dark);

        assert_eq!(wizard.next(&store), SetupStatus::InProgress(SetupStep::FontSize));
        store.update_font_size(FontSize::Large);

        assert_eq!(wizard.next(&store), SetupStatus::InProgress(SetupStep::AudioSpeed));
        store.update_audio_speed(AudioSpeed::Slow);
        assert_eq!(wizard.step_indicator(), "Step 4 of 4");
        assert_eq!(wizard.progress_percent(), 100);

        // Finish on the last step
        assert_eq!(wizard.next(&store), SetupStatus::Completed);
        assert!(wizard.is_complete());
        assert!(!wizard.was_skipped());
    }

    let (flag, store) = open(backend);
    assert_eq!(Page::at_startup(&flag), Page::Profile);
    assert_eq!(
        store.preferences(),
        AccessibilityPreferences {
            theme: Theme::Dark,
            font_size: FontSize::Large,
            audio_speed: AudioSpeed::Slow,
            contrast_mode: false,
        }
    );
}

#[test]
fn test_skip_keeps_choices_made_so_far() {
    let dir = TempDir::new().unwrap();
    let backend: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let (flag, mut store) = open(backend.clone());

    let mut wizard = SetupWizard::new(flag.clone());
    wizard.next(&store);
    store.update_theme(Theme::HighContrast);
    assert_eq!(wizard.skip(&store), SetupStatus::Completed);

    let (flag, store) = open(backend);
    assert!(flag.is_completed());
    assert_eq!(store.preferences().theme, Theme::HighContrast);
    assert_eq!(store.preferences().font_size, FontSize::Medium);
}

#[test]
fn test_flag_reset_shows_wizard_again() {
    let dir = TempDir::new().unwrap();
    let backend: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()));
    let (flag, store) = open(backend);

    SetupWizard::new(flag.clone()).skip(&store);
    assert_eq!(Page::at_startup(&flag), Page::Profile);

    flag.reset();
    assert_eq!(Page::at_startup(&flag), Page::Onboarding);
}
