use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::{
        models::{
            Language,
            Model,
        },
        TranslateSession,
    },
    gui::theme::Theme,
};

/// The submit form plus the error and result regions, drawn straight from
/// the session every frame. Returns true when the user asked to translate;
/// the caller owns the actual state transition.
pub fn show(ui: &mut egui::Ui, session: &mut TranslateSession, theme: &Theme) -> bool {
    let busy = session.is_loading();
    let mut submitted = false;

    ui.heading("Translation Agent");
    let muted = theme.muted(ui);
    ui.label(
        RichText::new("Send text to the remote agent and review its translations.").color(muted),
    );
    ui.add_space(10.0);

    ui.add_enabled(
        !busy,
        egui::TextEdit::multiline(&mut session.text)
            .desired_rows(5)
            .desired_width(f32::INFINITY)
            .hint_text("Enter text to translate..."),
    );
    ui.add_space(6.0);

    ui.add_enabled_ui(!busy, |ui| {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("language_combo")
                .selected_text(session.language.as_str())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        ui.selectable_value(&mut session.language, *language, language.as_str());
                    }
                });

            egui::ComboBox::from_id_salt("model_combo")
                .selected_text(session.model.as_str())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for model in Model::ALL {
                        ui.selectable_value(&mut session.model, *model, model.as_str());
                    }
                });
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let label = match busy {
            true => "Translating...",
            false => "Translate",
        };

        if ui.add_enabled(session.can_submit(), egui::Button::new(label)).clicked() {
            submitted = true;
        }

        if busy {
            ui.add(egui::Spinner::new());
        }
    });

    if let Some(error) = session.error() {
        let red = theme.red(ui);
        ui.add_space(10.0);
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, red))
            .corner_radius(4.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(red, format!("Error: {}", error));
            });
    }

    ui.add_space(10.0);
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(4.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            match session.result() {
                Some(result) => {
                    let cyan = theme.cyan(ui);
                    ui.label(RichText::new(&result.translation).size(16.0).color(cyan));
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("Tokens: {}", result.tokens)).color(muted));
                        ui.label(
                            RichText::new(format!(
                                "History: {} translations",
                                result.translation_count
                            ))
                            .color(muted),
                        );
                    });
                }
                None => {
                    ui.label(RichText::new("Translation will appear here...").color(muted));
                }
            }
        });

    submitted
}
