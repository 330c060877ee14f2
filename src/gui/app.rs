use std::{
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;

use super::{
    history_panel,
    settings_modal::{
        SettingsData,
        SettingsModal,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    translate_panel,
};
use crate::{
    agent::AgentApi,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        TranslateSession,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";

pub struct LingotApp {
    // Interaction state
    session: TranslateSession,

    // Configuration
    settings_data: SettingsData,

    // UI state
    theme: Theme,
    settings_modal: SettingsModal,

    // External services
    agent: Arc<AgentApi>,
    agent_connected: bool,
    last_agent_check: Option<Instant>,
    task_manager: TaskManager,
}

impl LingotApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let agent = Arc::new(
            AgentApi::new(&settings_data.agent_url).expect("Failed to build agent HTTP client"),
        );

        let theme = Theme::lingot();
        set_theme(&cc.egui_ctx, &theme);

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        Self {
            session: TranslateSession::new(),
            settings_data,
            theme,
            settings_modal: SettingsModal::new(),
            agent,
            agent_connected: false,
            last_agent_check: None,
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Translation(outcome) => self.session.settle(outcome),
            TaskResult::AgentConnection(connected) => self.agent_connected = connected,
        }
    }

    fn submit(&mut self) {
        if let Some(request) = self.session.begin_submit() {
            self.task_manager.translate(self.agent.clone(), request);
        }
    }

    fn update_agent_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_agent_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= 5,
        };

        if should_check {
            self.task_manager.check_agent_connection(self.agent.clone());
            self.last_agent_check = Some(now);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        if settings.agent_url != self.settings_data.agent_url {
            self.agent = Arc::new(self.agent.with_base_url(&settings.agent_url));
            self.agent_connected = false;
            // Probe the new endpoint on the next frame.
            self.last_agent_check = None;
        }

        self.settings_data = settings;
        self.save_settings();
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for LingotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.update_agent_status();

        if let Some(action) = TopBar::show(ctx, &self.theme, self.agent_connected) {
            match action {
                TopBarAction::OpenAgentSettings => {
                    self.settings_modal.open_settings(self.settings_data.clone());
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if translate_panel::show(ui, &mut self.session, &self.theme) {
                    self.submit();
                }

                history_panel::show(ui, self.session.history(), &self.theme);
            });
        });

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.apply_settings(settings);
        }

        self.sync_theme_preference(ctx);

        // Settled calls arrive over a channel, so keep painting while one is
        // pending; otherwise a slow repaint is enough for the status dot.
        if self.session.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(Duration::from_secs(2));
        }
    }
}
