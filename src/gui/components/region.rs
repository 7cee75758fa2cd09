// src/gui/components/region.rs
use eframe::egui::{self, widgets::Spinner, Color32, RichText};

use crate::view::Region;

const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

/// Draw the loading / empty / error text of `region`. Returns true when
/// the region has nothing else to show (anything but `Ready`).
pub fn draw_message<T>(ui: &mut egui::Ui, region: &Region<T>) -> bool {
    match region {
        Region::Ready(_) => false,
        Region::Idle => true,
        Region::Loading(msg) => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(16.0));
                ui.label(*msg);
            });
            true
        }
        Region::Empty(msg) => {
            ui.label(RichText::new(*msg).italics());
            true
        }
        Region::Failed(msg) => {
            ui.label(RichText::new(*msg).color(ERROR_RED));
            true
        }
    }
}
