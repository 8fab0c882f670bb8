//! GUI entry point for the skip-hire booking wizard

mod app;
mod heavy_waste_panel;
mod skip_panel;
mod waste_panel;

use app::SkipHireApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skip Hire",
        options,
        Box::new(|cc| Ok(Box::new(SkipHireApp::new(cc)))),
    )
}
