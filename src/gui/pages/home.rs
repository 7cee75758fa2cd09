// src/gui/pages/home.rs
use eframe::egui::{self, RichText};

use crate::{
    config::options::PageKind,
    gui::{actions, app::App, components::region, router},
};

use super::Page;

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn label(&self) -> &'static str { "Home" }
    fn kind(&self) -> PageKind { PageKind::Home }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(RichText::new("AmaSift Compare").size(28.0).strong());
            ui.label("Compare up to four products side by side and find the best value.");
            ui.add_space(6.0);
            if ui.button("Start Comparing").clicked() {
                router::navigate(app, PageKind::Compare);
            }
        });

        ui.add_space(16.0);
        ui.heading("Browse Categories");
        ui.separator();

        if region::draw_message(ui, &app.categories) {
            if app.categories.is_failed() && ui.button("Retry").clicked() {
                actions::load_categories(app);
            }
            return;
        }

        let Some(cats) = app.categories.ready() else { return };

        let mut picked: Option<String> = None;
        egui::ScrollArea::vertical().id_salt("category_grid").show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                for cat in cats {
                    let text = match cat.product_count {
                        Some(n) => format!("{}\n{} products", cat.category, n),
                        None => cat.category.clone(),
                    };
                    let btn = egui::Button::new(RichText::new(text).size(15.0))
                        .min_size(egui::vec2(180.0, 64.0));
                    if ui.add(btn).clicked() {
                        picked = Some(cat.category.clone());
                    }
                }
            });
        });

        if let Some(cat) = picked {
            tracing::info!("UI: Category card {:?}", cat);
            actions::browse_category(app, &cat);
        }
    }
}
