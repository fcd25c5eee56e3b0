#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::PogosimApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Pogosim"),
        ..Default::default()
    };

    eframe::run_native(
        "Pogosim",
        options,
        Box::new(|cc| Ok(Box::new(PogosimApp::new(cc)))),
    )
}
