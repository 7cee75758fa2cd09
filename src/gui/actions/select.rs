// src/gui/actions/select.rs
use crate::{
    api::types::{Product, ProductId},
    core::{SelectionError, Toggle},
    gui::app::App,
};

/// Card button: add or remove. At capacity the set is left alone and the
/// notice opens.
pub fn toggle_selection(app: &mut App, p: &Product) {
    match app.selection.toggle(p) {
        Ok(Toggle::Added) => {
            tracing::info!("Select: + {} (n={})", p.product_id, app.selection.count());
            app.status(format!("Added \"{}\"", p.title));
        }
        Ok(Toggle::Removed) => {
            tracing::info!("Select: - {} (n={})", p.product_id, app.selection.count());
            app.status(format!("Removed \"{}\"", p.title));
        }
        Err(e @ SelectionError::Full) => {
            tracing::info!("Select: rejected {} (full)", p.product_id);
            app.notice = Some(e.to_string());
        }
        Err(e @ SelectionError::Duplicate(_)) => {
            tracing::debug!("Select: {}", e);
        }
    }
}

pub fn remove_selection(app: &mut App, id: &ProductId) {
    if app.selection.remove(id).is_some() {
        tracing::info!("Select: - {} (n={})", id, app.selection.count());
    }
}
