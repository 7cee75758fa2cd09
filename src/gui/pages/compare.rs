// src/gui/pages/compare.rs
//
// Filter bar + product grid on top, comparison result below.
// The selection panel is drawn by App as a right side panel.

use eframe::egui;

use crate::{
    config::options::PageKind,
    gui::{actions, app::App, components},
};

use super::Page;

pub struct ComparePage;
pub static PAGE: ComparePage = ComparePage;

impl Page for ComparePage {
    fn label(&self) -> &'static str { "Compare" }
    fn kind(&self) -> PageKind { PageKind::Compare }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        components::filter_bar::draw(ui, app);
        ui.separator();

        let grid_h = (ui.available_height() * 0.5).max(220.0);
        egui::ScrollArea::vertical()
            .id_salt("product_grid")
            .max_height(grid_h)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                components::product_grid::draw(ui, app);
            });

        ui.separator();

        egui::ScrollArea::both()
            .id_salt("comparison")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                components::comparison_table::draw(ui, app);
                ui.add_space(8.0);
                components::history_panel::draw(ui, app);
            });
    }

    fn on_enter(&self, app: &mut App) {
        // First visit: populate the grid with the current filters.
        if matches!(app.products, crate::view::Region::Idle) {
            actions::load_products(app);
        }
    }
}
