// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use amasift_compare::{
    config::{
        options::{ApiOptions, AppOptions, PageKind},
        state::GuiState,
    },
    gui::{self, Launch},
    log,
};
use clap::Parser;
use eframe::egui::{IconData, ViewportBuilder};

/// AmaSift Compare desktop front end.
#[derive(Parser, Debug)]
#[command(name = "amasift", version, about)]
struct Args {
    /// Open this tab first: home, compare or deals
    #[arg(long, value_parser = parse_section)]
    section: Option<PageKind>,

    /// Preselect a category in the Compare filters
    #[arg(long)]
    category: Option<String>,

    /// Full API base URL (overrides --host)
    #[arg(long)]
    api: Option<String>,

    /// Backend host; localhost uses the dev port
    #[arg(long)]
    host: Option<String>,
}

fn parse_section(s: &str) -> Result<PageKind, String> {
    PageKind::from_section(s).ok_or_else(|| format!("unknown section '{}' (home, compare, deals)", s))
}

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    let log_guard = log::init(false);
    let args = Args::parse();

    let api = ApiOptions::resolve(args.api.as_deref(), args.host.as_deref());
    let options = AppOptions { api, ..AppOptions::default() };
    let launch = Launch { section: args.section, category: args.category };

    let size = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([size.window_w as f32, size.window_h as f32])
        .with_min_inner_size([820.0, 520.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, options, launch) {
        tracing::error!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
