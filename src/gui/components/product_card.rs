// src/gui/components/product_card.rs
//
// One product card. Purely a view; the caller decides what a click means.

use eframe::egui::{self, Color32, RichText, Sense, Stroke};

use crate::{config::consts::PLACEHOLDER_IMAGE, view::ProductCardView};

pub const CARD_W: f32 = 200.0;
const IMAGE_H: f32 = 120.0;

const DISCOUNT_RED: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);
const STAR_GOLD: Color32 = Color32::from_rgb(0xF0, 0xB4, 0x29);
const SELECTED_GREEN: Color32 = Color32::from_rgb(0x2E, 0x9D, 0x5B);

#[derive(Clone, Copy, Debug, Default)]
pub struct CardEvent {
    /// Main button (add/remove, view details)
    pub button: bool,
    /// Title clicked (open details)
    pub title: bool,
}

pub fn draw(ui: &mut egui::Ui, card: &ProductCardView, highlighted: bool) -> CardEvent {
    let mut ev = CardEvent::default();

    let stroke = if card.selected {
        Stroke::new(2.0, SELECTED_GREEN)
    } else if highlighted {
        Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(CARD_W);
            ui.vertical(|ui| {
                image(ui, &card.image_url, egui::vec2(CARD_W, IMAGE_H));

                let title = ui.add(
                    egui::Label::new(RichText::new(&card.title).strong())
                        .wrap()
                        .sense(Sense::click()),
                );
                if title.on_hover_text("Show details").clicked() {
                    ev.title = true;
                }

                if let Some(cat) = &card.category {
                    ui.small(cat);
                }

                ui.horizontal(|ui| {
                    ui.label(RichText::new(card.stars.glyphs()).color(STAR_GOLD));
                    ui.weak(&card.rating_count);
                });

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&card.price).size(16.0).strong());
                    if let Some(op) = &card.original_price {
                        ui.label(RichText::new(op).strikethrough().weak());
                    }
                    if let Some(badge) = &card.badge {
                        ui.label(RichText::new(badge).color(DISCOUNT_RED).strong());
                    }
                });

                let btn = egui::Button::new(card.button).selected(card.selected);
                if ui.add_sized([CARD_W, 24.0], btn).clicked() {
                    ev.button = true;
                }
            });
        });

    ev
}

/// Remote image, or a grey placeholder box when there is none.
pub fn image(ui: &mut egui::Ui, url: &str, size: egui::Vec2) {
    if url == PLACEHOLDER_IMAGE {
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter().rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No image",
            egui::FontId::proportional(12.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }
    ui.add_sized(
        size,
        egui::Image::new(url)
            .fit_to_exact_size(size)
            .maintain_aspect_ratio(true)
            .show_loading_spinner(true),
    );
}
