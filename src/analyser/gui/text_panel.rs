use crate::analyser::view::TextReport;
use crate::theme;
use eframe::egui;

pub fn render_text_report(ui: &mut egui::Ui, report: &TextReport) {
    ui.label(egui::RichText::new(&report.heading).strong().size(16.0));
    ui.add_space(theme::SPACING_SMALL);

    theme::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::both()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if report.monospace {
                    ui.add(
                        egui::Label::new(egui::RichText::new(&report.body).monospace().size(12.0))
                            .extend(),
                    );
                } else {
                    ui.add(egui::Label::new(egui::RichText::new(&report.body).size(14.0)).wrap());
                }
            });
    });
}
