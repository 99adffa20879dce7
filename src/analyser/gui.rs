//! The desktop window: a side panel with the five view buttons and the
//! country drop-down, and a central panel that paints the current view.
//!
//! All state lives in [`AnalysisModel`]; the widgets here only read it and
//! forward button presses to [`AnalysisModel::show`].

use super::model::AnalysisModel;
use super::view::{View, ViewKind};
use crate::config::COUNTRY_PLACEHOLDER;
use crate::theme;
use eframe::egui;
use egui_phosphor::regular as icons;

mod plots;
mod text_panel;

use plots::{render_boxplots, render_scatter, render_series};
use text_panel::render_text_report;

pub struct App {
    pub model: AnalysisModel,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, model: AnalysisModel) -> Self {
        theme::apply_theme(&cc.egui_ctx);
        Self { model }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .frame(theme::sidebar_frame())
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(kind) = render_controls(&mut self.model, ui) {
                    self.model.show(kind);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(status) = &self.model.status {
                ui.colored_label(theme::ACCENT_COLOR, status);
                ui.add_space(theme::SPACING_TINY);
            }
            render_view(ui, &self.model.current);
        });
    }
}

fn icon(kind: ViewKind) -> &'static str {
    match kind {
        ViewKind::Regression => icons::CHART_SCATTER,
        ViewKind::Boxplots => icons::CHART_BAR,
        ViewKind::Evaluation => icons::LIGHTBULB,
        ViewKind::Summary => icons::TABLE,
        ViewKind::GdpOverTime => icons::CHART_LINE,
    }
}

/// Draws the buttons and the drop-down; returns the view whose button was
/// pressed this frame.
fn render_controls(model: &mut AnalysisModel, ui: &mut egui::Ui) -> Option<ViewKind> {
    let mut clicked = None;

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = theme::SPACING_SMALL;
        for kind in ViewKind::ALL {
            let button = egui::Button::new(format!("{} {}", icon(kind), kind.as_str()));
            if ui.add_sized(theme::BUTTON_SIZE, button).clicked() {
                clicked = Some(kind);
            }
        }

        let AnalysisModel {
            regions,
            selected_country,
            ..
        } = model;
        egui::ComboBox::from_id_salt("country_select")
            .width(theme::BUTTON_SIZE[0])
            .selected_text(selected_country.as_str())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    selected_country,
                    COUNTRY_PLACEHOLDER.to_owned(),
                    COUNTRY_PLACEHOLDER,
                );
                for region in regions.iter() {
                    ui.selectable_value(selected_country, region.region.clone(), &region.region);
                }
            });
    });

    clicked
}

fn render_view(ui: &mut egui::Ui, view: &View) {
    match view {
        View::Empty => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Choose a view on the left.").color(egui::Color32::GRAY),
                );
            });
        }
        View::Regression(chart) => render_scatter(ui, chart),
        View::Boxplots(chart) => render_boxplots(ui, chart),
        View::TimeSeries(chart) => render_series(ui, chart),
        View::Text(report) => render_text_report(ui, report),
    }
}
