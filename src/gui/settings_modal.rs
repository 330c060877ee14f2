use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::agent::api::DEFAULT_AGENT_URL;

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub agent_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { agent_url: DEFAULT_AGENT_URL.to_string(), dark_mode: true }
    }
}

/// Edits the agent endpoint against a scratch copy; nothing is applied
/// until Save is pressed.
pub struct SettingsModal {
    open: bool,
    url_input: String,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, url_input: String::new(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.url_input = current_settings.agent_url.clone();
        self.original = current_settings;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.url_input.trim() != self.original.agent_url
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("agent_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.heading("Agent Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Endpoint:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .desired_width(f32::INFINITY)
                        .hint_text(DEFAULT_AGENT_URL),
                );
            });
            ui.small("Base URL of the translation agent; /translate and /health are appended.");

            ui.add_space(10.0);
            ui.separator();

            let can_save = self.is_dirty() && !self.url_input.trim().is_empty();

            ui.horizontal(|ui| {
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    let mut settings = self.original.clone();
                    settings.agent_url = self.url_input.trim().to_string();
                    result = Some(settings);
                    ui.close();
                }

                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
