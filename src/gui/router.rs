// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::{app::App, pages::{self, Page}};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::compare::PAGE,
    &pages::deals::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Home    => &pages::home::PAGE,
        Compare => &pages::compare::PAGE,
        Deals   => &pages::deals::PAGE,
    }
}

/// Switch tabs and run the new page's `on_enter`.
pub fn navigate(app: &mut App, kind: PageKind) {
    let prev = app.current_page_kind();
    app.state.gui.current_page = kind;
    tracing::info!("UI: Tab switch {:?} -> {:?}", prev, kind);
    page_for(kind).on_enter(app);
}
