#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::ConverterApp;
use std::path::Path;
use uc_app::ConverterConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional first argument: path to a YAML config
    let loaded = match std::env::args().nth(1) {
        Some(path) => ConverterConfig::load(Path::new(&path)),
        None => Ok(ConverterConfig::default()),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 640.0])
            .with_title("Unit Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |cc| Ok(Box::new(ConverterApp::new(cc, loaded)))),
    )
}
