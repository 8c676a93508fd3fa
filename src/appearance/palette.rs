//! Theme palettes and contrast checks.
//!
//! Each [`Theme`] maps to a palette and a set of egui [`Visuals`]. The
//! high contrast palette meets WCAG AAA (7:1) for primary text.

use egui::{Color32, Visuals};

use crate::preferences::Theme;

/// Light palette.
pub struct LightPalette;

impl LightPalette {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(26, 115, 232);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Dark palette.
pub struct DarkPalette;

impl DarkPalette {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(66, 133, 244);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// High contrast palette.
pub struct HighContrastPalette;

impl HighContrastPalette {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const PANEL_BG: Color32 = Color32::from_rgb(10, 10, 10);
    pub const CARD_BG: Color32 = Color32::from_rgb(20, 20, 20);

    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(220, 220, 220);

    pub const ACCENT: Color32 = Color32::from_rgb(0, 200, 255); // Cyan
    pub const BORDER: Color32 = Color32::WHITE;
}

/// Build egui visuals for a theme.
pub fn visuals_for(theme: Theme) -> Visuals {
    match theme {
        Theme::Light => light_visuals(),
        Theme::Dark => dark_visuals(),
        Theme::HighContrast => high_contrast_visuals(),
    }
}

/// The egui base theme a preference theme renders on.
pub fn egui_theme(theme: Theme) -> egui::Theme {
    if theme.is_dark() {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    }
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightPalette::PANEL_BG;
    visuals.panel_fill = LightPalette::PANEL_BG;
    visuals.faint_bg_color = LightPalette::CARD_BG;
    visuals.extreme_bg_color = LightPalette::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightPalette::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightPalette::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = LightPalette::ACCENT;

    visuals.selection.bg_fill = LightPalette::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightPalette::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightPalette::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightPalette::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightPalette::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightPalette::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightPalette::BORDER;

    visuals
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkPalette::PANEL_BG;
    visuals.panel_fill = DarkPalette::PANEL_BG;
    visuals.faint_bg_color = DarkPalette::CARD_BG;
    visuals.extreme_bg_color = DarkPalette::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkPalette::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkPalette::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 62);
    visuals.widgets.active.bg_fill = DarkPalette::ACCENT;

    visuals.selection.bg_fill = DarkPalette::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkPalette::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkPalette::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkPalette::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkPalette::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkPalette::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkPalette::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkPalette::BORDER;

    visuals
}

fn high_contrast_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = HighContrastPalette::PANEL_BG;
    visuals.panel_fill = HighContrastPalette::PANEL_BG;
    visuals.faint_bg_color = HighContrastPalette::CARD_BG;
    visuals.extreme_bg_color = HighContrastPalette::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = HighContrastPalette::CARD_BG;
    visuals.widgets.inactive.bg_fill = HighContrastPalette::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 40);
    visuals.widgets.active.bg_fill = HighContrastPalette::ACCENT;

    visuals.selection.bg_fill = HighContrastPalette::ACCENT.linear_multiply(0.5);
    visuals.selection.stroke.color = HighContrastPalette::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = HighContrastPalette::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = HighContrastPalette::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = HighContrastPalette::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = HighContrastPalette::BACKGROUND;

    // Heavier borders
    visuals.widgets.noninteractive.bg_stroke.color = HighContrastPalette::BORDER;
    visuals.widgets.inactive.bg_stroke.color = HighContrastPalette::BORDER;
    visuals.widgets.noninteractive.bg_stroke.width = 1.5;
    visuals.widgets.inactive.bg_stroke.width = 1.5;

    visuals
}

/// Contrast ratio between two colors, from 1 to 21.
pub fn contrast_ratio(fg: Color32, bg: Color32) -> f32 {
    let fg_lum = relative_luminance(fg);
    let bg_lum = relative_luminance(bg);

    let (lighter, darker) = if fg_lum > bg_lum {
        (fg_lum, bg_lum)
    } else {
        (bg_lum, fg_lum)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// https://www.w3.org/TR/WCAG21/#dfn-relative-luminance
fn relative_luminance(color: Color32) -> f32 {
    let r = linearize(color.r() as f32 / 255.0);
    let g = linearize(color.g() as f32 / 255.0);
    let b = linearize(color.b() as f32 / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(value: f32) -> f32 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG AA for normal text (4.5:1).
pub fn meets_aa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// WCAG AAA for normal text (7:1).
pub fn meets_aaa(fg: Color32, bg: Color32) -> bool {
    contrast_ratio(fg, bg) >= 7.0
}
