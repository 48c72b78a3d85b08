use eframe::egui::{self, RichText, Ui};

use crate::data::model::SalesDataset;
use crate::state::{year_selector_enabled, ReportType, SelectorState, YEAR_RANGE};

// ---------------------------------------------------------------------------
// Top bar – title and dataset summary
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, dataset: &SalesDataset) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Automobile Sales Statistics Dashboard");
        ui.separator();
        ui.label(format!(
            "{} records, {}–{}",
            dataset.len(),
            dataset.years.first().copied().unwrap_or_default(),
            dataset.years.last().copied().unwrap_or_default(),
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – report selectors
// ---------------------------------------------------------------------------

/// Render the two report selectors.  The year dropdown is only interactive
/// in yearly-statistics mode; its value is kept (but ignored) otherwise.
pub fn side_panel(ui: &mut Ui, state: &mut SelectorState) {
    ui.heading("Report");
    ui.separator();

    ui.strong("Select Report Type:");
    let report_text = state
        .report_type
        .map(|rt| rt.label())
        .unwrap_or("Select a report type");
    egui::ComboBox::from_id_salt("report_type")
        .selected_text(report_text)
        .show_ui(ui, |ui: &mut Ui| {
            for rt in ReportType::ALL {
                ui.selectable_value(&mut state.report_type, Some(rt), rt.label());
            }
        });

    ui.add_space(8.0);

    ui.strong("Select Year:");
    let enabled = year_selector_enabled(state.report_type);
    ui.add_enabled_ui(enabled, |ui: &mut Ui| {
        let year_text = state
            .selected_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Select year".to_string());
        egui::ComboBox::from_id_salt("select_year")
            .selected_text(year_text)
            .show_ui(ui, |ui: &mut Ui| {
                for year in YEAR_RANGE {
                    ui.selectable_value(&mut state.selected_year, Some(year), year.to_string());
                }
            });
    });

    if state.report_type == Some(ReportType::YearlyStatistics) && state.selected_year.is_none() {
        ui.add_space(8.0);
        ui.label(RichText::new("Choose a year to see yearly statistics.").weak());
    }
}
