use eframe::egui;

use crate::color::ColorMap;
use crate::data::model::SalesDataset;
use crate::report;
use crate::state::SelectorState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AutoDashApp {
    /// The dataset, loaded once at startup and read-only afterwards.
    dataset: SalesDataset,
    /// Current dropdown selections.
    state: SelectorState,
    /// Per-vehicle-type colours, stable across every chart.
    colors: ColorMap,
}

impl AutoDashApp {
    pub fn new(dataset: SalesDataset) -> Self {
        let colors = ColorMap::new(&dataset.vehicle_types);
        Self {
            dataset,
            state: SelectorState::default(),
            colors,
        }
    }
}

impl eframe::App for AutoDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.dataset);
        });

        // ---- Left side panel: report selectors ----
        egui::SidePanel::left("selector_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: recomputed chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let rows = report::build_report(
                self.state.report_type,
                self.state.selected_year,
                &self.dataset,
            );
            plot::chart_grid(ui, &rows, &self.colors);
        });
    }
}
