// src/gui/components/filter_bar.rs
//
// Category / price / rating / search filters. Values stay as typed in
// GuiState; they are parsed when "Apply Filters" runs.

use eframe::egui;

use crate::gui::{actions, app::App};

const ALL_CATEGORIES: &str = "All Categories";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut apply = false;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let names: Vec<String> = app
            .categories
            .ready()
            .map(|cats| cats.iter().map(|c| c.category.clone()).collect())
            .unwrap_or_default();

        let filters = &mut app.state.gui.filters;

        ui.label("Category:");
        let shown = if filters.category.is_empty() { ALL_CATEGORIES } else { filters.category.as_str() };
        egui::ComboBox::from_id_salt("category_filter")
            .selected_text(shown)
            .width(180.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.category, s!(), ALL_CATEGORIES);
                for name in &names {
                    ui.selectable_value(&mut filters.category, name.clone(), name);
                }
            });

        ui.label("Price:");
        ui.add(egui::TextEdit::singleline(&mut filters.min_price).hint_text("Min").desired_width(60.0));
        ui.label("-");
        ui.add(egui::TextEdit::singleline(&mut filters.max_price).hint_text("Max").desired_width(60.0));

        ui.label("Min rating:");
        ui.add(egui::TextEdit::singleline(&mut filters.min_rating).hint_text("0-5").desired_width(40.0));

        let search = ui.add(
            egui::TextEdit::singleline(&mut filters.search)
                .hint_text("Search")
                .desired_width(160.0),
        );
        if search.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            apply = true;
        }

        if ui.button("Apply Filters").clicked() {
            apply = true;
        }
    });

    if apply {
        tracing::debug!("UI: Apply filters {:?}", app.state.gui.filters);
        actions::load_products(app);
    }
}
