// src/gui/components/product_grid.rs
use eframe::egui;

use crate::{
    api::types::Product,
    gui::{actions, app::App},
    view::ProductCardView,
};

use super::{product_card, region};

enum Click {
    Toggle(Product),
    Details(Product),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if region::draw_message(ui, &app.products) { return; }
    let Some(products) = app.products.ready() else { return };

    let mut click: Option<Click> = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
        for p in products {
            let view = ProductCardView::build(p, &app.selection);
            let highlighted = app.highlight.as_ref() == Some(&p.product_id);
            let resp = product_card::draw(ui, &view, highlighted);
            if resp.button {
                click = Some(Click::Toggle(p.clone()));
            } else if resp.title {
                click = Some(Click::Details(p.clone()));
            }
        }
    });

    match click {
        Some(Click::Toggle(p)) => actions::toggle_selection(app, &p),
        Some(Click::Details(p)) => actions::load_detail(app, &p.product_id),
        None => {}
    }
}
