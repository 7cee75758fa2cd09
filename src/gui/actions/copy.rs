// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv, gui::app::App};

/// Comparison table -> clipboard, in the chosen export format.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(view) = app.comparison.ready() else {
            tracing::debug!("Copy: Clicked, but there's no comparison");
            app.status("Nothing to copy");
            return;
        };

        let (headers, rows) = view.table.to_string_rows(false);
        let opts = &app.state.options.export;
        tracing::info!(
            "Copy: format={:?}, rows={}, cols={}, headers={}",
            opts.format, rows.len(), headers.len(), opts.include_headers
        );
        csv::to_export_string(&headers, &rows, opts)
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
