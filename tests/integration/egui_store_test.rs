//! Integration tests for the store driving an egui context.

use std::sync::Arc;

use egui::TextStyle;
use flexidesk::appearance::{DarkPalette, EguiAppearance, HighContrastPalette, LightPalette};
use flexidesk::preferences::{FontSize, PreferencesStore, Theme};
use flexidesk::storage::{MemoryStore, PreferencesRepository};

fn body_size(ctx: &egui::Context) -> f32 {
    ctx.style_of(ctx.theme()).text_styles[&TextStyle::Body].size
}

#[test]
fn test_store_updates_reach_egui() {
    let ctx = egui::Context::default();
    let repo = PreferencesRepository::new(Arc::new(MemoryStore::new()));
    let mut store = PreferencesStore::open(repo, EguiAppearance::new(ctx.clone()));
    let base = egui::Style::default().text_styles[&TextStyle::Body].size;

    assert_eq!(ctx.theme(), egui::Theme::Light);
    assert_eq!(ctx.style_of(egui::Theme::Light).visuals.panel_fill, LightPalette::PANEL_BG);
    assert_eq!(body_size(&ctx), base);

    store.update_theme(Theme::Dark);
    assert_eq!(ctx.theme(), egui::Theme::Dark);
    assert_eq!(ctx.style_of(egui::Theme::Dark).visuals.panel_fill, DarkPalette::PANEL_BG);

    store.update_font_size(FontSize::Small);
    assert_eq!(body_size(&ctx), base * 0.875);

    store.update_theme(Theme::HighContrast);
    assert_eq!(
        ctx.style_of(egui::Theme::Dark).visuals.panel_fill,
        HighContrastPalette::PANEL_BG
    );
    // Theme switches keep the chosen text size
    assert_eq!(body_size(&ctx), base * 0.875);

    store.reset_to_defaults();
    assert_eq!(ctx.theme(), egui::Theme::Light);
    assert_eq!(body_size(&ctx), base);
}
