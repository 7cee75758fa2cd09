// src/gui/components/status_bar.rs
use eframe::egui::{self, widgets::Spinner};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.busy() {
            ui.add(Spinner::new().size(14.0));
        }
        ui.label(app.status_text());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(app.client.base_url());
        });
    });
}
