// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{...}.

mod copy;    // src/gui/actions/copy.rs
mod fetch;   // src/gui/actions/fetch.rs
mod select;  // src/gui/actions/select.rs

pub use copy::copy;
pub use fetch::{
    apply, browse_category, compare, compare_ids, load_categories, load_deals, load_detail,
    load_history, load_products, view_deal, Fetched, Payload,
};
pub use select::{remove_selection, toggle_selection};
