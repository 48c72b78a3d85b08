use eframe::egui::{Color32, ScrollArea, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon};

use crate::color::ColorMap;
use crate::report::ChartSpec;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the report as rows of two charts side by side.  An empty report
/// (nothing selected yet) shows a hint instead.
pub fn chart_grid(ui: &mut Ui, rows: &[[ChartSpec; 2]], colors: &ColorMap) {
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a report type (and a year for yearly statistics)");
        });
        return;
    }

    let row_height = (ui.available_height() / rows.len() as f32 - 40.0).max(240.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in rows {
                ui.columns(2, |cols: &mut [Ui]| {
                    for (col, chart) in cols.iter_mut().zip(row.iter()) {
                        render_chart(col, chart, colors, row_height);
                    }
                });
            }
        });
}

fn render_chart(ui: &mut Ui, chart: &ChartSpec, colors: &ColorMap, height: f32) {
    ui.strong(chart.title());
    match chart {
        ChartSpec::Line {
            title,
            x_label,
            y_label,
            points,
            x_ticks,
        } => line_chart(ui, title, x_label, y_label, points, x_ticks.as_deref(), height),
        ChartSpec::Bar {
            title,
            x_label,
            y_label,
            categories,
        } => bar_chart(ui, title, x_label, y_label, categories, colors, height),
        ChartSpec::Pie { title, slices } => pie_chart(ui, title, slices, colors, height),
        ChartSpec::GroupedBar {
            title,
            x_label,
            y_label,
            series,
        } => grouped_bar_chart(ui, title, x_label, y_label, series, colors, height),
    }
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Individual chart renderers
// ---------------------------------------------------------------------------

fn line_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
    x_ticks: Option<&[String]>,
    height: f32,
) {
    let mut plot = Plot::new(id.to_string())
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label(y_label);

    if let Some(ticks) = x_ticks {
        plot = plot.x_axis_formatter(categorical_formatter(ticks));
    }

    plot.show(ui, |plot_ui| {
        let pts: PlotPoints = points.iter().map(|&(x, y)| [x, y]).collect();
        plot_ui.line(Line::new(pts).color(Color32::LIGHT_BLUE).width(1.5));
    });
}

fn bar_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    categories: &[(String, f64)],
    colors: &ColorMap,
    height: f32,
) {
    let labels: Vec<String> = categories.iter().map(|(label, _)| label.clone()).collect();

    Plot::new(id.to_string())
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(categorical_formatter(&labels))
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = categories
                .iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    Bar::new(i as f64, *value)
                        .name(label)
                        .width(0.6)
                        .fill(colors.color_for(label))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// egui_plot has no pie primitive; each slice is a filled polygon sector on
/// a unit circle, with its share of the total in the legend label.
fn pie_chart(ui: &mut Ui, id: &str, slices: &[(String, f64)], colors: &ColorMap, height: f32) {
    let total: f64 = slices.iter().map(|(_, value)| value).sum();

    Plot::new(id.to_string())
        .height(height)
        .legend(Legend::default())
        .show_axes([false, false])
        .show_grid(false)
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                return;
            }
            let mut start_angle = 0.0_f64;
            for (label, value) in slices {
                let fraction = value / total;
                let end_angle = start_angle + fraction * std::f64::consts::TAU;

                let steps = ((fraction * 64.0).ceil() as usize).max(2);
                let mut pts: Vec<[f64; 2]> = Vec::with_capacity(steps + 2);
                pts.push([0.0, 0.0]);
                for s in 0..=steps {
                    let angle = start_angle + (end_angle - start_angle) * s as f64 / steps as f64;
                    pts.push([angle.cos(), angle.sin()]);
                }

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(pts))
                        .name(format!("{label}: {:.1}%", fraction * 100.0))
                        .fill_color(colors.color_for(label))
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start_angle = end_angle;
            }
        });
}

fn grouped_bar_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    series: &[(String, Vec<(f64, f64)>)],
    colors: &ColorMap,
    height: f32,
) {
    // Bars for the different vehicle types sharing an unemployment rate are
    // offset around it so they sit side by side.
    let n = series.len().max(1) as f64;
    let group_width = 0.08;
    let bar_width = group_width / n;

    Plot::new(id.to_string())
        .height(height)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .show(ui, |plot_ui| {
            for (idx, (label, points)) in series.iter().enumerate() {
                let offset = (idx as f64 - (n - 1.0) / 2.0) * bar_width;
                let color = colors.color_for(label);
                let bars: Vec<Bar> = points
                    .iter()
                    .map(|&(x, h)| {
                        Bar::new(x + offset, h)
                            .name(label)
                            .width(bar_width * 0.9)
                            .fill(color)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(label).color(color));
            }
        });
}

/// Axis formatter mapping integer positions to category labels; positions
/// between categories get no label.
fn categorical_formatter(
    labels: &[String],
) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String + 'static {
    let labels = labels.to_vec();
    move |mark, _range| {
        let nearest = mark.value.round();
        if (mark.value - nearest).abs() > 0.05 || nearest < 0.0 {
            return String::new();
        }
        labels
            .get(nearest as usize)
            .cloned()
            .unwrap_or_default()
    }
}
