// src/gui/components/mod.rs
pub mod comparison_table;
pub mod detail_window;
pub mod filter_bar;
pub mod history_panel;
pub mod nav;
pub mod notice;
pub mod product_card;
pub mod product_grid;
pub mod region;
pub mod selection_panel;
pub mod status_bar;
