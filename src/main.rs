use atelier::gui::PortfolioApp;
use eframe::egui;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Atelier Portfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "Atelier Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}
