//! Accessibility preference value types.
//!
//! Every field of [`AccessibilityPreferences`] is a closed set, so an
//! out-of-range preference cannot be represented.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// High contrast theme for low-vision users
    HighContrast,
}

impl Theme {
    /// All themes in display order.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::HighContrast]
    }

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
            Theme::HighContrast => "High Contrast Mode",
        }
    }

    /// Whether the theme renders light text on a dark background.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark | Theme::HighContrast)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParsePreferenceError::Theme(s.to_string()))
    }
}

/// Text size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// All font sizes from smallest to largest.
    pub fn all() -> &'static [FontSize] {
        &[FontSize::Small, FontSize::Medium, FontSize::Large]
    }

    /// Stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    /// Multiplier applied to the environment's base text sizes.
    pub fn scale(&self) -> f32 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.25,
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FontSize {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::all()
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParsePreferenceError::FontSize(s.to_string()))
    }
}

/// Audio playback speed.
///
/// Stored as a plain number; only the four listed rates are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum AudioSpeed {
    /// 0.75x
    Slow,
    /// 1.0x (default)
    #[default]
    Normal,
    /// 1.25x
    Fast,
    /// 1.5x
    Faster,
}

impl AudioSpeed {
    /// All speeds from slowest to fastest.
    pub fn all() -> &'static [AudioSpeed] {
        &[
            AudioSpeed::Slow,
            AudioSpeed::Normal,
            AudioSpeed::Fast,
            AudioSpeed::Faster,
        ]
    }

    /// Playback rate multiplier.
    pub fn as_f64(&self) -> f64 {
        match self {
            AudioSpeed::Slow => 0.75,
            AudioSpeed::Normal => 1.0,
            AudioSpeed::Fast => 1.25,
            AudioSpeed::Faster => 1.5,
        }
    }

    /// Label such as "1.25x". Whole rates drop the fraction ("1x").
    pub fn label(&self) -> String {
        format!("{}x", self.as_f64())
    }
}

impl std::fmt::Display for AudioSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<f64> for AudioSpeed {
    type Error = ParsePreferenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        AudioSpeed::all()
            .iter()
            .copied()
            .find(|speed| speed.as_f64() == value)
            .ok_or(ParsePreferenceError::AudioSpeed(value))
    }
}

impl From<AudioSpeed> for f64 {
    fn from(speed: AudioSpeed) -> Self {
        speed.as_f64()
    }
}

/// A preference value outside its allowed set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParsePreferenceError {
    #[error("unknown theme: {0:?}")]
    Theme(String),

    #[error("unknown font size: {0:?}")]
    FontSize(String),

    #[error("unsupported audio speed: {0}")]
    AudioSpeed(f64),
}

/// The user's accessibility choices.
///
/// A plain value: updates produce a new value rather than editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    /// Color theme
    pub theme: Theme,
    /// Text size
    pub font_size: FontSize,
    /// Audio playback speed
    pub audio_speed: AudioSpeed,
    /// Enhanced contrast toggle
    pub contrast_mode: bool,
}

impl AccessibilityPreferences {
    /// Copy with a different theme.
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Copy with a different font size.
    pub fn with_font_size(self, font_size: FontSize) -> Self {
        Self { font_size, ..self }
    }

    /// Copy with a different audio speed.
    pub fn with_audio_speed(self, audio_speed: AudioSpeed) -> Self {
        Self {
            audio_speed,
            ..self
        }
    }

    /// Copy with contrast mode toggled on or off.
    pub fn with_contrast_mode(self, contrast_mode: bool) -> Self {
        Self {
            contrast_mode,
            ..self
        }
    }

    /// Compute the value that results from a single change.
    pub fn apply(self, change: PreferenceChange) -> Self {
        match change {
            PreferenceChange::Theme(theme) => self.with_theme(theme),
            PreferenceChange::FontSize(size) => self.with_font_size(size),
            PreferenceChange::AudioSpeed(speed) => self.with_audio_speed(speed),
            PreferenceChange::ContrastMode(enabled) => self.with_contrast_mode(enabled),
        }
    }

    /// Rows for a "current settings" summary.
    pub fn summary(&self) -> [(&'static str, String); 4] {
        let contrast = if self.contrast_mode {
            "Enhanced"
        } else {
            "Normal"
        };

        [
            ("Theme", self.theme.as_str().to_string()),
            ("Font Size", self.font_size.as_str().to_string()),
            ("Audio Speed", self.audio_speed.label()),
            ("Contrast", contrast.to_string()),
        ]
    }
}

/// A single-field update to [`AccessibilityPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(Theme),
    FontSize(FontSize),
    AudioSpeed(AudioSpeed),
    ContrastMode(bool),
}
