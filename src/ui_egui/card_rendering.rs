//! Rendering of the countdown cards and the end-state screen.

use crate::models::settings::Settings;
use crate::services::countdown::{TimeRemaining, TimeUnit};

// Card rendering constants
const CARD_ROUNDING: f32 = 12.0;
const CARD_PADDING: f32 = 16.0;
const CARD_STROKE_WIDTH: f32 = 2.0;
const VALUE_FONT_SIZE: f32 = 56.0;
const LABEL_FONT_SIZE: f32 = 16.0;
const TITLE_FONT_SIZE: f32 = 44.0;
const TAGLINE_FONT_SIZE: f32 = 20.0;
const HEADLINE_FONT_SIZE: f32 = 56.0;
const MESSAGE_FONT_SIZE: f32 = 30.0;
const SECTION_SPACING: f32 = 24.0;

fn accent_color() -> egui::Color32 {
    egui::Color32::from_rgb(139, 92, 246)
}

/// Title, one card per unit, and the footer.
pub fn render_counting(ui: &mut egui::Ui, settings: &Settings, remaining: &TimeRemaining) {
    let accent = accent_color();
    let weak = ui.visuals().weak_text_color();

    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING);
        ui.label(
            egui::RichText::new(&settings.title)
                .size(TITLE_FONT_SIZE)
                .strong()
                .color(accent),
        );
        ui.label(
            egui::RichText::new(&settings.tagline)
                .size(TAGLINE_FONT_SIZE)
                .color(weak),
        );
        ui.add_space(SECTION_SPACING);
    });

    ui.columns(TimeUnit::ALL.len(), |columns| {
        for (column, unit) in columns.iter_mut().zip(TimeUnit::ALL) {
            render_unit_card(column, unit, &remaining.padded(unit), accent);
        }
    });

    ui.vertical_centered(|ui| {
        ui.add_space(SECTION_SPACING);
        ui.label(egui::RichText::new(&settings.footer).italics().color(weak));
    });
}

fn render_unit_card(ui: &mut egui::Ui, unit: TimeUnit, value: &str, accent: egui::Color32) {
    let weak = ui.visuals().weak_text_color();

    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .stroke(egui::Stroke::new(
            CARD_STROKE_WIDTH,
            accent.gamma_multiply(0.4),
        ))
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(value)
                        .size(VALUE_FONT_SIZE)
                        .monospace()
                        .strong()
                        .color(accent),
                );
                ui.label(
                    egui::RichText::new(unit.label().to_uppercase())
                        .size(LABEL_FONT_SIZE)
                        .strong()
                        .color(weak),
                );
            });
        });
}

/// Celebration screen shown once the target has passed.
pub fn render_elapsed(ui: &mut egui::Ui, settings: &Settings) {
    let accent = accent_color();
    let top_space = (ui.available_height() * 0.3).max(SECTION_SPACING);

    ui.vertical_centered(|ui| {
        ui.add_space(top_space);
        ui.label(
            egui::RichText::new(&settings.elapsed_headline)
                .size(HEADLINE_FONT_SIZE)
                .strong()
                .color(accent),
        );
        ui.add_space(SECTION_SPACING);
        ui.label(
            egui::RichText::new(&settings.elapsed_message)
                .size(MESSAGE_FONT_SIZE)
                .strong(),
        );
    });
}
