use crate::data::aggregate;
use crate::data::model::SalesDataset;
use crate::state::ReportType;

// ---------------------------------------------------------------------------
// ChartSpec – renderer-independent chart description
// ---------------------------------------------------------------------------

/// What a single chart shows.  Produced by [`build_report`] and turned into
/// egui_plot widgets by `ui::plot`; keeping it plain data means the whole
/// recomputation rule is testable without a UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Line {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<(f64, f64)>,
        /// Tick labels for a categorical x axis (index = x position).
        /// `None` for numeric axes.
        x_ticks: Option<Vec<String>>,
    },
    Bar {
        title: String,
        x_label: String,
        y_label: String,
        categories: Vec<(String, f64)>,
    },
    Pie {
        title: String,
        slices: Vec<(String, f64)>,
    },
    GroupedBar {
        title: String,
        x_label: String,
        y_label: String,
        /// One series per vehicle type: (label, [(x, height), ...]).
        series: Vec<(String, Vec<(f64, f64)>)>,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Line { title, .. }
            | ChartSpec::Bar { title, .. }
            | ChartSpec::Pie { title, .. }
            | ChartSpec::GroupedBar { title, .. } => title,
        }
    }
}

// ---------------------------------------------------------------------------
// Report recomputation rule
// ---------------------------------------------------------------------------

/// Recompute the results region from the current selector state.
///
/// Returns rows of two charts each.  An incomplete selection (no report type,
/// or yearly statistics without a year) is a normal state and yields an empty
/// report, not an error.  In recession mode the year is ignored; the year
/// dropdown is disabled there so its stale value carries no meaning.
pub fn build_report(
    report_type: Option<ReportType>,
    selected_year: Option<i32>,
    data: &SalesDataset,
) -> Vec<[ChartSpec; 2]> {
    match (report_type, selected_year) {
        (Some(ReportType::RecessionPeriodStatistics), _) => recession_report(data),
        (Some(ReportType::YearlyStatistics), Some(year)) => yearly_report(data, year),
        _ => Vec::new(),
    }
}

/// Four charts over the recession subset of the dataset.
fn recession_report(data: &SalesDataset) -> Vec<[ChartSpec; 2]> {
    let recession: Vec<_> = data
        .records
        .iter()
        .filter(|r| r.recession)
        .cloned()
        .collect();

    let yearly = ChartSpec::Line {
        title: "Average Automobile Sales fluctuation over Recession Period".to_string(),
        x_label: "Year".to_string(),
        y_label: "Automobile Sales".to_string(),
        points: aggregate::mean_sales_by_year(&recession)
            .into_iter()
            .map(|(year, sales)| (year as f64, sales))
            .collect(),
        x_ticks: None,
    };

    let by_type = ChartSpec::Bar {
        title: "Average Vehicles Sold by Vehicle Type during Recession".to_string(),
        x_label: "Vehicle Type".to_string(),
        y_label: "Automobile Sales".to_string(),
        categories: aggregate::mean_sales_by_vehicle_type(&recession, &data.vehicle_types),
    };

    let ad_share = ChartSpec::Pie {
        title: "Total Advertising Expenditure Share by Vehicle Type during Recession".to_string(),
        slices: aggregate::sum_ad_spend_by_vehicle_type(&recession, &data.vehicle_types),
    };

    let unemployment = ChartSpec::GroupedBar {
        title: "Effect of Unemployment Rate on Vehicle Type and Sales".to_string(),
        x_label: "Unemployment Rate".to_string(),
        y_label: "Average Automobile Sales".to_string(),
        series: aggregate::mean_sales_by_unemployment_and_type(&recession, &data.vehicle_types),
    };

    vec![[yearly, by_type], [ad_share, unemployment]]
}

/// Two whole-dataset charts plus two charts over the chosen year.
fn yearly_report(data: &SalesDataset, year: i32) -> Vec<[ChartSpec; 2]> {
    let year_subset: Vec<_> = data
        .records
        .iter()
        .filter(|r| r.year == year)
        .cloned()
        .collect();

    let all_years = ChartSpec::Line {
        title: "Yearly Automobile Sales (All Years)".to_string(),
        x_label: "Year".to_string(),
        y_label: "Automobile Sales".to_string(),
        points: aggregate::mean_sales_by_year(&data.records)
            .into_iter()
            .map(|(y, sales)| (y as f64, sales))
            .collect(),
        x_ticks: None,
    };

    let monthly = aggregate::sum_sales_by_month(&data.records, &data.months);
    let monthly_totals = ChartSpec::Line {
        title: "Total Monthly Automobile Sales".to_string(),
        x_label: "Month".to_string(),
        y_label: "Automobile Sales".to_string(),
        points: monthly
            .iter()
            .enumerate()
            .map(|(i, (_, total))| (i as f64, *total))
            .collect(),
        x_ticks: Some(monthly.into_iter().map(|(month, _)| month).collect()),
    };

    let by_type = ChartSpec::Bar {
        title: format!("Average Vehicles Sold by Vehicle Type in {year}"),
        x_label: "Vehicle Type".to_string(),
        y_label: "Automobile Sales".to_string(),
        categories: aggregate::mean_sales_by_vehicle_type(&year_subset, &data.vehicle_types),
    };

    let ad_spend = ChartSpec::Pie {
        title: "Total Advertisement Expenditure for Each Vehicle".to_string(),
        slices: aggregate::sum_ad_spend_by_vehicle_type(&year_subset, &data.vehicle_types),
    };

    vec![[all_years, monthly_totals], [by_type, ad_spend]]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SalesDataset, SalesRecord};

    fn rec(
        year: i32,
        month: &str,
        recession: bool,
        vehicle_type: &str,
        sales: f64,
        ad_spend: f64,
        unemployment: f64,
    ) -> SalesRecord {
        SalesRecord {
            year,
            month: month.to_string(),
            recession,
            vehicle_type: vehicle_type.to_string(),
            automobile_sales: sales,
            advertising_expenditure: ad_spend,
            unemployment_rate: unemployment,
        }
    }

    fn sample_dataset() -> SalesDataset {
        SalesDataset::from_records(vec![
            rec(1980, "Jan", false, "SUV", 10.0, 100.0, 4.0),
            rec(1980, "Feb", false, "Sports", 20.0, 200.0, 4.5),
            rec(1981, "Jan", true, "SUV", 5.0, 50.0, 7.0),
            rec(1981, "Feb", true, "Sports", 8.0, 80.0, 7.5),
            rec(1982, "Jan", false, "SUV", 30.0, 300.0, 5.0),
        ])
    }

    #[test]
    fn no_report_type_yields_empty_output() {
        let data = sample_dataset();
        assert!(build_report(None, None, &data).is_empty());
        assert!(build_report(None, Some(1980), &data).is_empty());
    }

    #[test]
    fn yearly_without_year_yields_empty_output() {
        let data = sample_dataset();
        let out = build_report(Some(ReportType::YearlyStatistics), None, &data);
        assert!(out.is_empty());
    }

    #[test]
    fn recession_report_is_two_rows_of_two() {
        let data = sample_dataset();
        let out = build_report(Some(ReportType::RecessionPeriodStatistics), None, &data);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn recession_report_ignores_selected_year() {
        let data = sample_dataset();
        let rt = Some(ReportType::RecessionPeriodStatistics);
        let without_year = build_report(rt, None, &data);
        let with_year = build_report(rt, Some(1980), &data);
        assert_eq!(without_year, with_year);
    }

    #[test]
    fn recession_report_only_covers_recession_rows() {
        let data = sample_dataset();
        let out = build_report(Some(ReportType::RecessionPeriodStatistics), None, &data);

        // Chart 1: mean sales by year over recession rows only (1981).
        match &out[0][0] {
            ChartSpec::Line { points, .. } => {
                assert_eq!(points, &vec![(1981.0, 6.5)]);
            }
            other => panic!("expected line chart, got {other:?}"),
        }
        // Chart 3: ad spend share over recession rows.
        match &out[1][0] {
            ChartSpec::Pie { slices, .. } => {
                assert_eq!(
                    slices,
                    &vec![("SUV".to_string(), 50.0), ("Sports".to_string(), 80.0)]
                );
            }
            other => panic!("expected pie chart, got {other:?}"),
        }
    }

    #[test]
    fn yearly_report_splits_whole_dataset_and_year_subset() {
        let data = sample_dataset();
        let rt = Some(ReportType::YearlyStatistics);
        let out_1980 = build_report(rt, Some(1980), &data);
        let out_1982 = build_report(rt, Some(1982), &data);
        assert_eq!(out_1980.len(), 2);

        // Charts 1–2 are computed over the whole dataset: identical for any year.
        assert_eq!(out_1980[0], out_1982[0]);

        // Chart 1 covers all years.
        match &out_1980[0][0] {
            ChartSpec::Line { points, .. } => {
                assert_eq!(points, &vec![(1980.0, 15.0), (1981.0, 6.5), (1982.0, 30.0)]);
            }
            other => panic!("expected line chart, got {other:?}"),
        }

        // Chart 3 varies with the year and embeds it in the title.
        match (&out_1980[1][0], &out_1982[1][0]) {
            (
                ChartSpec::Bar {
                    title: t80,
                    categories: c80,
                    ..
                },
                ChartSpec::Bar {
                    title: t82,
                    categories: c82,
                    ..
                },
            ) => {
                assert!(t80.contains("1980"));
                assert!(t82.contains("1982"));
                assert_eq!(
                    c80,
                    &vec![("SUV".to_string(), 10.0), ("Sports".to_string(), 20.0)]
                );
                assert_eq!(c82, &vec![("SUV".to_string(), 30.0)]);
            }
            other => panic!("expected bar charts, got {other:?}"),
        }
    }

    #[test]
    fn monthly_chart_keeps_calendar_order() {
        let data = sample_dataset();
        let out = build_report(Some(ReportType::YearlyStatistics), Some(1980), &data);
        match &out[0][1] {
            ChartSpec::Line {
                points, x_ticks, ..
            } => {
                assert_eq!(
                    x_ticks.as_deref(),
                    Some(&["Jan".to_string(), "Feb".to_string()][..])
                );
                // Jan: 10 + 5 + 30, Feb: 20 + 8.
                assert_eq!(points, &vec![(0.0, 45.0), (1.0, 28.0)]);
            }
            other => panic!("expected line chart, got {other:?}"),
        }
    }

    #[test]
    fn year_with_no_rows_yields_empty_charts_not_errors() {
        let data = sample_dataset();
        let out = build_report(Some(ReportType::YearlyStatistics), Some(2005), &data);
        assert_eq!(out.len(), 2);
        match &out[1][0] {
            ChartSpec::Bar { categories, .. } => assert!(categories.is_empty()),
            other => panic!("expected bar chart, got {other:?}"),
        }
        match &out[1][1] {
            ChartSpec::Pie { slices, .. } => assert!(slices.is_empty()),
            other => panic!("expected pie chart, got {other:?}"),
        }
    }

    #[test]
    fn recomputation_is_idempotent() {
        let data = sample_dataset();
        for (rt, year) in [
            (Some(ReportType::RecessionPeriodStatistics), None),
            (Some(ReportType::YearlyStatistics), Some(1981)),
        ] {
            let first = build_report(rt, year, &data);
            let second = build_report(rt, year, &data);
            assert_eq!(first, second);
        }
    }
}
