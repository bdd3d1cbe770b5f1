#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod list;
mod logger;
mod surface;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(200);
    if logger.clone().init().is_err() {
        eprintln!("logger already installed");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Sheaf"),
        ..Default::default()
    };

    eframe::run_native(
        "Sheaf",
        options,
        Box::new(move |cc| Ok(Box::new(app::SheafApp::new(cc, logger)))),
    )
}
