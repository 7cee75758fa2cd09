// src/lib.rs

#[macro_use]
pub mod macros;

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod gui;
pub mod log;
pub mod view;
