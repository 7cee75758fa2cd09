// src/gui/components/notice.rs
//
// Blocking notice (e.g. selection at capacity). Closed with OK, Escape or a
// click outside.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.notice.clone() else { return };

    let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(msg);
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.button("OK").clicked()
        })
        .inner
    });

    if modal.inner || modal.should_close() {
        app.notice = None;
    }
}
