// src/gui/components/history_panel.rs
//
// Past comparisons of this session. Needs a session id, which the backend
// hands out with the first comparison.

use eframe::egui;

use crate::{
    api::types::ProductId,
    gui::{actions, app::App},
};

use super::region;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let header = egui::CollapsingHeader::new("Comparison history")
        .id_salt("history")
        .open(Some(app.state.gui.show_history))
        .show(ui, |ui| body(ui, app));

    if header.header_response.clicked() {
        app.state.gui.show_history = !app.state.gui.show_history;
        if app.state.gui.show_history {
            actions::load_history(app);
        }
    }
}

fn body(ui: &mut egui::Ui, app: &mut App) {
    if app.session_id.is_none() {
        ui.weak("Run a comparison to start a session.");
        return;
    }

    if ui.add_enabled(!app.history.is_loading(), egui::Button::new("Refresh")).clicked() {
        actions::load_history(app);
    }

    if region::draw_message(ui, &app.history) { return; }
    let Some(entries) = app.history.ready() else { return };

    let mut again: Option<Vec<ProductId>> = None;
    for entry in entries {
        ui.horizontal(|ui| {
            ui.weak(entry.created_at.as_deref().unwrap_or("-"));
            let ids: Vec<&str> = entry.product_ids.iter().map(ProductId::as_str).collect();
            ui.label(ids.join(", "));
            let enabled = entry.product_ids.len() >= crate::config::consts::MIN_COMPARE;
            if ui.add_enabled(enabled, egui::Button::new("Compare again")).clicked() {
                again = Some(entry.product_ids.clone());
            }
        });
    }

    if let Some(ids) = again {
        actions::compare_ids(app, ids);
    }
}
