// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::{ IconData, ViewportBuilder };
use log::LevelFilter;
use spec_table::{config::{consts::LOG_FILE, options::AppOptions}, gui, logging};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/spec_table.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let _ = logging::init(LOG_FILE, LevelFilter::Info);

    let mut viewport = ViewportBuilder::default().with_inner_size([1100.0, 700.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    // Optional catalog path to load on start
    let app_options = AppOptions {
        input: std::env::args().nth(1).map(PathBuf::from),
        ..AppOptions::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
