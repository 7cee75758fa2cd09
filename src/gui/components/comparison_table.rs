// src/gui/components/comparison_table.rs
//
// Draws the comparison result. Row labels in the first column, one column
// per product in selection order. Winning cells are tinted.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::options::ExportFormat,
    core::compare::{self, Cell, ComparisonRow},
    gui::{actions, app::{App, ComparisonView}},
};

use super::{product_card, region};

const WINNER_FILL: Color32 = Color32::from_rgba_premultiplied(0x2E, 0x9D, 0x5B, 0x40);
const STAR_GOLD: Color32 = Color32::from_rgb(0xF0, 0xB4, 0x29);

const LABEL_W: f32 = 120.0;
const COL_W: f32 = 190.0;
const ROW_H: f32 = 24.0;
const IMAGE_ROW_H: f32 = 110.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Comparison");
        let ready = app.comparison.ready().is_some();

        ui.add_enabled_ui(ready, |ui| {
            let export = &mut app.state.options.export;
            let before = export.format;
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Table, "Text");
            if export.format != before {
                tracing::info!("UI: Export format -> {:?}", export.format);
            }
            ui.checkbox(&mut export.include_headers, "Include headers");

            if ui.button("Copy").clicked() {
                actions::copy(app, ui.ctx());
            }
        });
    });

    if region::draw_message(ui, &app.comparison) {
        if matches!(app.comparison, crate::view::Region::Idle) {
            ui.weak("Select at least two products and press Compare.");
        }
        return;
    }
    let Some(view) = app.comparison.ready() else { return };
    table(ui, view);
    if let Some(note) = &view.best_value {
        ui.add_space(4.0);
        ui.label(RichText::new(note).italics());
    }
}

fn table(ui: &mut egui::Ui, view: &ComparisonView) {
    let t = &view.table;

    let mut builder = TableBuilder::new(ui)
        .id_salt(("comparison_table", t.ids.len()))
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(LABEL_W));
    for _ in 0..t.ncols() {
        builder = builder.column(Column::initial(COL_W).at_least(80.0).resizable(true).clip(true));
    }

    builder
        .header(ROW_H + 8.0, |mut header| {
            header.col(|_| {});
            for title in &t.titles {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(RichText::new(title).strong()).on_hover_text(title);
                });
            }
        })
        .body(|mut body| {
            for row in &t.rows {
                let h = if row.label == compare::IMAGE.label { IMAGE_ROW_H } else { ROW_H };
                body.row(h, |mut tr| {
                    tr.col(|ui| { ui.label(RichText::new(row.label).strong()); });
                    for (i, cell) in row.cells.iter().enumerate() {
                        tr.col(|ui| draw_cell(ui, row, i, cell));
                    }
                });
            }
        });
}

fn draw_cell(ui: &mut egui::Ui, row: &ComparisonRow, ix: usize, cell: &Cell) {
    if row.winner == Some(ix) {
        ui.painter().rect_filled(ui.max_rect(), 2.0, WINNER_FILL);
    }
    let strong = row.winner == Some(ix);

    match cell {
        Cell::Image(url) => {
            let url = url.as_deref().unwrap_or(crate::config::consts::PLACEHOLDER_IMAGE);
            product_card::image(ui, url, egui::vec2(COL_W - 20.0, IMAGE_ROW_H - 10.0));
        }
        Cell::Stars { stars, rating } => {
            ui.label(RichText::new(stars.glyphs()).color(STAR_GOLD));
            let text = RichText::new(format!("({:.1})", rating));
            ui.label(if strong { text.strong() } else { text });
        }
        Cell::Link(Some(url)) => {
            ui.hyperlink_to("View on Amazon", url);
        }
        other => {
            let text = RichText::new(other.text());
            ui.label(if strong { text.strong() } else { text });
        }
    }
}
