// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod pages;
pub mod router;

pub use app::{run, Launch};
