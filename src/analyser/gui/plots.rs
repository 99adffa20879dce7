use crate::analyser::view::{BoxplotChart, ScatterPlot, SeriesChart};
use crate::theme;
use eframe::egui;
use egui_plot::{BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, Points};
use std::ops::RangeInclusive;

pub fn render_scatter(ui: &mut egui::Ui, chart: &ScatterPlot) {
    ui.heading(&chart.title);
    Plot::new("regression_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .height(theme::PLOT_HEIGHT)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new("Regions", chart.points.clone())
                    .radius(4.0)
                    .color(theme::POINT_COLOR),
            );
            if !chart.fitted_line.is_empty() {
                plot_ui.line(
                    Line::new("Fitted line", chart.fitted_line.clone())
                        .color(theme::FIT_LINE_COLOR)
                        .width(2.0),
                );
            }
        });
}

/// Label for a mark that falls exactly on a category position.
fn category_label(labels: &[String], mark: f64, first_position: f64) -> String {
    let offset = mark - first_position;
    if offset < 0.0 || offset.fract() != 0.0 {
        return String::new();
    }
    labels.get(offset as usize).cloned().unwrap_or_default()
}

pub fn render_boxplots(ui: &mut egui::Ui, chart: &BoxplotChart) {
    ui.heading(&chart.title);

    let labels: Vec<String> = chart.boxes.iter().map(|b| b.label.clone()).collect();
    let elems: Vec<BoxElem> = chart
        .boxes
        .iter()
        .enumerate()
        .map(|(i, b)| {
            BoxElem::new(
                i as f64 + 1.0,
                BoxSpread::new(b.lower_whisker, b.q1, b.median, b.q3, b.upper_whisker),
            )
            .name(&b.label)
            .box_width(0.5)
            .whisker_width(0.25)
        })
        .collect();
    let outliers: Vec<[f64; 2]> = chart
        .boxes
        .iter()
        .enumerate()
        .flat_map(|(i, b)| b.outliers.iter().map(move |v| [i as f64 + 1.0, *v]))
        .collect();

    Plot::new("boxplot_plot")
        .y_axis_label(chart.y_label.clone())
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value, 1.0)
        })
        .height(theme::PLOT_HEIGHT)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new("Boxplots", elems).color(theme::POINT_COLOR));
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new("Outliers", outliers)
                        .radius(3.0)
                        .color(theme::ACCENT_COLOR),
                );
            }
        });
}

pub fn render_series(ui: &mut egui::Ui, chart: &SeriesChart) {
    ui.heading(&chart.title);
    if chart.point_count() == 0 {
        ui.label("No GDP records for this location.");
        return;
    }

    let axis_labels = chart.time_labels.clone();
    let hover_labels = chart.time_labels.clone();
    Plot::new("gdp_time_plot")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&axis_labels, mark.value, 0.0)
        })
        .label_formatter(move |_name, point| {
            let time = category_label(&hover_labels, point.x.round(), 0.0);
            format!("{time}\nGDP: {:.2}", point.y)
        })
        .height(theme::PLOT_HEIGHT)
        .show(ui, |plot_ui| {
            for segment in &chart.segments {
                plot_ui.line(
                    Line::new("GDP", segment.clone())
                        .color(theme::SERIES_COLOR)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new("GDP", segment.clone())
                        .radius(3.0)
                        .color(theme::SERIES_COLOR),
                );
            }
        });
}
