// src/gui/components/nav.rs
//
// Top tabs. Performs the tab switch itself through the router.

use eframe::egui::{self, RichText};

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        ui.label(RichText::new("AmaSift Compare").strong().size(18.0));
        ui.separator();

        let cur = app.current_page_kind();
        for page in router::all_pages() {
            let kind = page.kind();
            let selected = kind == cur;
            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                router::navigate(app, kind);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let n = app.selection.count();
            if n > 0 {
                ui.label(format!("{} selected", n));
            }
        });
    });
}
