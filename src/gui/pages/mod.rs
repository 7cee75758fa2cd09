// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::options::PageKind, gui::app::App};

pub mod compare;
pub mod deals;
pub mod home;

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active. Default: nothing.
    fn on_enter(&self, _app: &mut App) {}
}
