use eframe::egui;
use lingot::gui::LingotApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([880.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Lingot"),
        ..Default::default()
    };

    eframe::run_native("Lingot", options, Box::new(|cc| Ok(Box::new(LingotApp::new(cc)))))
}
