use eframe::egui::{
    self,
    containers,
};

use crate::gui::theme::Theme;

pub enum TopBarAction {
    OpenAgentSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, theme: &Theme, agent_connected: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Agent Settings").clicked() {
                        action = Some(TopBarAction::OpenAgentSettings);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = match agent_connected {
                        true => theme.green(ui),
                        false => theme.red(ui),
                    };
                    let status = match agent_connected {
                        true => "Agent online",
                        false => "Agent offline",
                    };
                    ui.colored_label(color, "●").on_hover_text(status);
                    ui.label("Agent");
                });
            });
        });

        action
    }
}
