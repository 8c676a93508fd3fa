//! Appearance applier backed by an egui context.

use std::collections::BTreeMap;

use egui::{FontId, TextStyle};

use super::palette::{egui_theme, visuals_for};
use super::AppearanceApplier;
use crate::preferences::{FontSize, Theme};

/// Pushes theme visuals and scaled text styles into an [`egui::Context`].
#[derive(Debug, Clone)]
pub struct EguiAppearance {
    ctx: egui::Context,
}

impl EguiAppearance {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }

    /// The wrapped context.
    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }
}

impl AppearanceApplier for EguiAppearance {
    fn apply_theme(&mut self, theme: Theme) {
        let base = egui_theme(theme);
        self.ctx.set_theme(base);
        self.ctx.set_visuals_of(base, visuals_for(theme));
        tracing::debug!("Applied theme {} to egui context", theme.as_str());
    }

    fn apply_font_size(&mut self, size: FontSize) {
        let text_styles = scaled_text_styles(size.scale());
        self.ctx.all_styles_mut(|style| {
            style.text_styles = text_styles.clone();
        });
        tracing::debug!("Applied font size {} to egui context", size.as_str());
    }
}

/// egui's default text styles with every size multiplied by `scale`.
///
/// Always scales from the defaults so repeated calls do not compound.
pub fn scaled_text_styles(scale: f32) -> BTreeMap<TextStyle, FontId> {
    egui::Style::default()
        .text_styles
        .into_iter()
        .map(|(style, mut font)| {
            font.size *= scale;
            (style, font)
        })
        .collect()
}
