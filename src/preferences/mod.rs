//! Accessibility preferences: the value type and the store that owns it.

pub mod store;
pub mod types;

pub use store::PreferencesStore;
pub use types::{
    AccessibilityPreferences, AudioSpeed, FontSize, ParsePreferenceError, PreferenceChange, Theme,
};
