mod app;
mod color;
mod data;
mod report;
mod state;
mod ui;

use app::AutoDashApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is the only network dependency; without it the dashboard
    // has nothing to show, so a failed fetch is fatal.
    let dataset = match data::loader::fetch_dataset() {
        Ok(ds) => {
            log::info!(
                "Loaded {} sales records ({} vehicle types, years {:?}–{:?})",
                ds.len(),
                ds.vehicle_types.len(),
                ds.years.first(),
                ds.years.last(),
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Automobile Sales Statistics Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(AutoDashApp::new(dataset)))),
    )
}
