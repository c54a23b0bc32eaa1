use eframe::egui::{
    self,
    containers,
};

use crate::{
    core::CatalogStatus,
    gui::theme::Theme,
};

pub enum TopBarAction {
    Refresh,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        status: &CatalogStatus,
        theme: &Theme,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Refresh Catalog").clicked() {
                        action = Some(TopBarAction::Refresh);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_store_status(ui, status, theme);
                });
            });
        });

        action
    }

    fn show_store_status(ui: &mut egui::Ui, status: &CatalogStatus, theme: &Theme) {
        let (color, tooltip) = match status {
            CatalogStatus::Loading => (theme.orange(), "Fetching projects...".to_string()),
            CatalogStatus::Loaded => (theme.green(), "Connected to content store".to_string()),
            CatalogStatus::Failed(message) => {
                (theme.red(), format!("Content store error: {message}"))
            }
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Store").on_hover_text(&tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
        });
    }
}
