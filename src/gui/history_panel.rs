use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::HistoryEntry,
    gui::theme::Theme,
};

/// Server-supplied history, one row per entry in the order received. Rows
/// are keyed by index, so identical submissions still render separately.
pub fn show(ui: &mut egui::Ui, history: &[HistoryEntry], theme: &Theme) {
    if history.is_empty() {
        return;
    }

    ui.add_space(16.0);
    ui.heading("Translation History");
    ui.add_space(6.0);

    let purple = theme.purple(ui);
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.label(RichText::new("Language").color(purple));
            });
            header.col(|ui| {
                ui.label(RichText::new("Model").color(purple));
            });
            header.col(|ui| {
                ui.label(RichText::new("Text").color(purple));
            });
            header.col(|ui| {
                ui.label(RichText::new("Translation").color(purple));
            });
        })
        .body(|mut body| {
            body.rows(text_height, history.len(), |mut row| {
                let entry = &history[row.index()];
                row.col(|ui| {
                    ui.label(entry.to_language.as_str());
                });
                row.col(|ui| {
                    ui.label(entry.model.as_str());
                });
                row.col(|ui| {
                    ui.label(&entry.text);
                });
                row.col(|ui| {
                    let cyan = theme.cyan(ui);
                    ui.label(RichText::new(&entry.translation).color(cyan));
                });
            });
        });
}
