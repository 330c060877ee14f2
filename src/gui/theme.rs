use eframe::egui::{
    self,
    Color32,
    Ui,
    Visuals,
};

/// Zinc-and-cyan palette in dark and light variants, registered with egui
/// so the built-in theme preference switch flips between them.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::lingot()
    }
}

impl Theme {
    pub fn lingot() -> Self {
        Theme { dark: ThemeDetails::zinc_dark(), light: ThemeDetails::zinc_light() }
    }

    fn details(&self, ui: &Ui) -> &ThemeDetails {
        if ui.visuals().dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn red(&self, ui: &Ui) -> Color32 {
        self.details(ui).red
    }

    pub fn green(&self, ui: &Ui) -> Color32 {
        self.details(ui).green
    }

    pub fn cyan(&self, ui: &Ui) -> Color32 {
        self.details(ui).cyan
    }

    pub fn purple(&self, ui: &Ui) -> Color32 {
        self.details(ui).purple
    }

    pub fn muted(&self, ui: &Ui) -> Color32 {
        self.details(ui).muted
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    background_dark: Color32,
    background_light: Color32,
    selection: Color32,
    foreground: Color32,
    muted: Color32,
    red: Color32,
    green: Color32,
    cyan: Color32,
    purple: Color32,
}

impl ThemeDetails {
    fn zinc_dark() -> Self {
        Self {
            background: Color32::from_rgb(24, 24, 27),
            background_dark: Color32::from_rgb(9, 9, 11),
            background_light: Color32::from_rgb(39, 39, 42),
            selection: Color32::from_rgb(63, 63, 70),
            foreground: Color32::from_rgb(244, 244, 245),
            muted: Color32::from_rgb(161, 161, 170),
            red: Color32::from_rgb(248, 113, 113),
            green: Color32::from_rgb(74, 222, 128),
            cyan: Color32::from_rgb(103, 232, 249),
            purple: Color32::from_rgb(196, 181, 253),
        }
    }

    fn zinc_light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 250),
            background_dark: Color32::from_rgb(228, 228, 231),
            background_light: Color32::from_rgb(255, 255, 255),
            selection: Color32::from_rgb(212, 212, 216),
            foreground: Color32::from_rgb(24, 24, 27),
            muted: Color32::from_rgb(113, 113, 122),
            red: Color32::from_rgb(185, 28, 28),
            green: Color32::from_rgb(21, 128, 61),
            cyan: Color32::from_rgb(14, 116, 144),
            purple: Color32::from_rgb(109, 40, 217),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, is_dark: bool) {
    let (mut visuals, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    visuals.widgets.noninteractive.bg_fill = details.background;
    visuals.widgets.noninteractive.fg_stroke.color = details.foreground;
    visuals.widgets.inactive.bg_fill = details.background_light;
    visuals.widgets.inactive.weak_bg_fill = details.background_light;
    visuals.widgets.inactive.fg_stroke.color = details.foreground;
    visuals.widgets.hovered.bg_fill = details.selection;
    visuals.widgets.hovered.bg_stroke.color = details.cyan;
    visuals.widgets.active.bg_fill = details.selection;
    visuals.widgets.active.bg_stroke.color = details.cyan;
    visuals.widgets.open.bg_fill = details.background_light;

    visuals.selection.bg_fill = details.selection;
    visuals.hyperlink_color = details.cyan;
    visuals.error_fg_color = details.red;

    visuals.window_fill = details.background;
    visuals.panel_fill = details.background;
    visuals.faint_bg_color = match is_dark {
        true => details.background_dark,
        false => details.background_light,
    };
    visuals.extreme_bg_color = details.background_dark;
    visuals.code_bg_color = details.background_light;

    ctx.set_visuals_of(variant, visuals);
}
