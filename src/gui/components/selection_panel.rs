// src/gui/components/selection_panel.rs
//
// "Selected for comparison (n)" list with per-item remove and the Compare
// button (enabled from two picks).

use eframe::egui::{self, RichText};

use crate::{
    api::types::ProductId,
    gui::{actions, app::App},
    view::SelectionSummary,
};

use super::product_card;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let summary = SelectionSummary::build(&app.selection);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.heading("Selected");
        ui.label(RichText::new(&summary.count_text).strong());
    });
    ui.separator();

    let mut remove: Option<ProductId> = None;

    if summary.entries.is_empty() {
        ui.weak("Pick up to four products to compare.");
    }

    for entry in &summary.entries {
        ui.horizontal(|ui| {
            product_card::image(ui, &entry.image_url, egui::vec2(40.0, 40.0));
            ui.vertical(|ui| {
                ui.add(egui::Label::new(&entry.title).truncate());
                ui.label(RichText::new(&entry.price).strong());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").on_hover_text("Remove").clicked() {
                    remove = Some(entry.id.clone());
                }
            });
        });
        ui.add_space(4.0);
    }

    ui.separator();

    ui.horizontal(|ui| {
        let compare = ui.add_enabled(summary.compare_enabled, egui::Button::new("Compare"));
        if compare.clicked() {
            actions::compare(app);
        }
        if ui.add_enabled(!summary.entries.is_empty(), egui::Button::new("Clear")).clicked() {
            tracing::info!("UI: Selection cleared");
            app.selection.clear();
        }
    });

    if let Some(id) = remove {
        actions::remove_selection(app, &id);
    }
}
