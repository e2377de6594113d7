use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points, VLine};

use crate::color::TrendColors;
use crate::data::model::YearSummary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trend chart (central panel)
// ---------------------------------------------------------------------------

/// Render average salary and job count per year as two stacked line charts.
///
/// Years are placed at x = 0, 1, 2, … in the same order as the summary
/// table, so sorting the table also reorders the chart.
pub fn trend_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset().is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if state.loading {
                ui.heading("Loading…");
            } else {
                ui.heading("No data available  (File → Open…)");
            }
        });
        return;
    }

    let ordered: Vec<&YearSummary> = state.ordered_summaries().collect();
    let labels: Vec<String> = ordered.iter().map(|s| s.year.clone()).collect();
    let selected_x = state
        .selected_year()
        .and_then(|year| labels.iter().position(|l| l == year))
        .map(|i| i as f64);

    let colors = TrendColors::default();
    let half_height = (ui.available_height() / 2.0 - 8.0).max(120.0);

    let salary: Vec<[f64; 2]> = ordered
        .iter()
        .enumerate()
        .map(|(i, s)| [i as f64, s.avg_salary_usd])
        .collect();
    series_plot(
        ui,
        "avg_salary_plot",
        "Average Salary (USD)",
        salary,
        colors.avg_salary,
        &labels,
        selected_x,
        half_height,
    );

    ui.add_space(8.0);

    let jobs: Vec<[f64; 2]> = ordered
        .iter()
        .enumerate()
        .map(|(i, s)| [i as f64, s.total_jobs as f64])
        .collect();
    series_plot(
        ui,
        "total_jobs_plot",
        "Total Jobs",
        jobs,
        colors.total_jobs,
        &labels,
        selected_x,
        half_height,
    );
}

#[allow(clippy::too_many_arguments)]
fn series_plot(
    ui: &mut Ui,
    id: &str,
    name: &str,
    points: Vec<[f64; 2]>,
    color: Color32,
    labels: &[String],
    selected_x: Option<f64>,
    height: f32,
) {
    let axis_labels = labels.to_vec();
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .y_axis_label(name)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(true)
        .x_axis_formatter(move |mark: GridMark, _range| year_label(&axis_labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name(name)
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(color)
                    .radius(3.5),
            );
            if let Some(x) = selected_x {
                plot_ui.vline(VLine::new(x).color(Color32::GRAY).width(1.0));
            }
        });
}

/// Axis tick label: the year at an integer position, nothing in between.
fn year_label(labels: &[String], x: f64) -> String {
    if x.fract().abs() > 1e-6 || x < 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}
