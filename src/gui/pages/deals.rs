// src/gui/pages/deals.rs
use eframe::egui;

use crate::{
    api::types::Product,
    config::options::PageKind,
    gui::{actions, app::App, components::{product_card, region}},
    view::DealCardView,
};

use super::Page;

pub struct DealsPage;
pub static PAGE: DealsPage = DealsPage;

impl Page for DealsPage {
    fn label(&self) -> &'static str { "Deals" }
    fn kind(&self) -> PageKind { PageKind::Deals }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.heading("Top Deals");
            if ui.add_enabled(!app.deals.is_loading(), egui::Button::new("Refresh")).clicked() {
                actions::load_deals(app);
            }
        });
        ui.separator();

        if region::draw_message(ui, &app.deals) { return; }
        let Some(deals) = app.deals.ready() else { return };

        let mut clicked: Option<Product> = None;
        egui::ScrollArea::vertical()
            .id_salt("deals_grid")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                    for p in deals {
                        let view = DealCardView::build(p);
                        if product_card::draw(ui, view.card(), false).button {
                            clicked = Some(p.clone());
                        }
                    }
                });
            });

        if let Some(p) = clicked {
            actions::view_deal(app, &p);
        }
    }

    /// Deals are refetched every time the tab is opened.
    fn on_enter(&self, app: &mut App) {
        actions::load_deals(app);
    }
}
