use eframe::egui;
use kanagrid::gui::KanagridApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kanagrid")
            .with_inner_size([920.0, 720.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native("kanagrid", options, Box::new(|cc| Ok(Box::new(KanagridApp::new(cc)))))
}
