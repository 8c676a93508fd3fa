//! Appearance side effects.
//!
//! Theme and font size changes are pushed into whatever is rendering the UI
//! through an [`AppearanceApplier`]. The preference transition itself never
//! touches the environment; the store calls the applier after replacing its
//! value.

pub mod egui_env;
pub mod palette;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::preferences::{AccessibilityPreferences, FontSize, Theme};

pub use egui_env::EguiAppearance;
pub use palette::{DarkPalette, HighContrastPalette, LightPalette};

/// Attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Attribute carrying the active font size.
pub const FONT_SIZE_ATTRIBUTE: &str = "data-font-size";

/// Applies visual preferences to a rendering environment.
pub trait AppearanceApplier {
    /// Apply a theme.
    fn apply_theme(&mut self, theme: Theme);

    /// Apply a font size.
    fn apply_font_size(&mut self, size: FontSize);

    /// Apply both visual fields of `preferences`.
    fn apply_all(&mut self, preferences: &AccessibilityPreferences) {
        self.apply_theme(preferences.theme);
        self.apply_font_size(preferences.font_size);
    }
}

/// Applier for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAppearance;

impl AppearanceApplier for NoopAppearance {
    fn apply_theme(&mut self, _theme: Theme) {}

    fn apply_font_size(&mut self, _size: FontSize) {}
}

/// Applier that writes `data-theme` / `data-font-size` attributes into a
/// shared map, the way a web front end tags its document root.
///
/// Clones share the same attributes, so a handle kept by the caller sees
/// every write made through the store.
#[derive(Debug, Clone, Default)]
pub struct AttributeAppearance {
    inner: Arc<Mutex<AttributeState>>,
}

#[derive(Debug, Default)]
struct AttributeState {
    attributes: BTreeMap<String, String>,
    history: Vec<(String, String)>,
}

impl AttributeAppearance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|state| state.attributes.get(name).cloned())
    }

    /// Every attribute write in order.
    pub fn history(&self) -> Vec<(String, String)> {
        self.inner
            .lock()
            .map(|state| state.history.clone())
            .unwrap_or_default()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        match self.inner.lock() {
            Ok(mut state) => {
                state.attributes.insert(name.to_string(), value.to_string());
                state.history.push((name.to_string(), value.to_string()));
            }
            Err(_) => tracing::warn!("Attribute state poisoned, dropping {}={}", name, value),
        }
    }
}

impl AppearanceApplier for AttributeAppearance {
    fn apply_theme(&mut self, theme: Theme) {
        self.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }

    fn apply_font_size(&mut self, size: FontSize) {
        self.set_attribute(FONT_SIZE_ATTRIBUTE, size.as_str());
    }
}
