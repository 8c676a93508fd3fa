//! FlexiDesk - Accessibility Preferences
//!
//! Owns a user's accessibility preferences (theme, font size, audio speed,
//! contrast mode), pushes the visual ones into the rendering environment,
//! and persists them to a local key-value store.
//!
//! ```no_run
//! use flexidesk::{AttributeAppearance, PreferencesStore, Theme};
//! use flexidesk::storage::config::load_config;
//!
//! let config = load_config().unwrap_or_default();
//! flexidesk::logging::init_tracing(&config.logging);
//!
//! let mut store = PreferencesStore::from_config(&config, AttributeAppearance::new());
//! store.update_theme(Theme::HighContrast);
//! store.save_current_preferences();
//! ```

pub mod appearance;
pub mod logging;
pub mod onboarding;
pub mod preferences;
pub mod storage;

// Re-export commonly used types
pub use appearance::{AppearanceApplier, AttributeAppearance, EguiAppearance, NoopAppearance};
pub use onboarding::{OnboardingFlag, Page, SetupWizard};
pub use preferences::{AccessibilityPreferences, AudioSpeed, FontSize, PreferencesStore, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore, PreferencesRepository};
