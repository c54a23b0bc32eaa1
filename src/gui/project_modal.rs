use eframe::egui;

use crate::{
    core::Viewer,
    gui::theme::Theme,
};

pub struct ProjectModal;

impl ProjectModal {
    /// Shows the modal viewer for the currently open project. Keyboard
    /// bindings are evaluated here, so they only exist while the viewer
    /// is open and disappear with it.
    pub fn show(ctx: &egui::Context, viewer: &mut Viewer, theme: &Theme) {
        if !viewer.is_open() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            viewer.close();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            viewer.next();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            viewer.prev();
        }

        let mut go_next = false;
        let mut go_prev = false;
        let mut close_clicked = false;

        let modal = egui::Modal::new(egui::Id::new("project_modal")).show(ctx, |ui| {
            let Some(open) = viewer.open() else {
                return;
            };
            let project = open.project();

            ui.set_width(720.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(theme.muted(&project.category.to_uppercase()));
                    ui.heading(theme.heading(&project.title));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("✕").clicked() {
                        close_clicked = true;
                    }
                });
            });

            ui.add_space(8.0);

            match open.current_image() {
                Some(url) => {
                    ui.vertical_centered(|ui| {
                        ui.add(egui::Image::new(url).max_size(egui::vec2(680.0, 400.0)));
                    });
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(60.0);
                        ui.label(theme.muted("No images for this project."));
                        ui.add_space(60.0);
                    });
                }
            }

            if open.images().len() > 1 {
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            go_prev = true;
                        }
                        ui.label(
                            theme.muted(&format!("{} / {}", open.index() + 1, open.images().len())),
                        );
                        if ui.button("▶").clicked() {
                            go_next = true;
                        }
                    });
                });
            }

            ui.add_space(10.0);
            ui.separator();

            egui::Grid::new("project_details").num_columns(2).spacing([40.0, 6.0]).show(
                ui,
                |ui| {
                    ui.label(theme.muted("Location"));
                    ui.label(project.location_text());
                    ui.end_row();

                    ui.label(theme.muted("Total Area"));
                    ui.label(project.area_text());
                    ui.end_row();

                    ui.label(theme.muted("Year"));
                    ui.label(project.year_text());
                    ui.end_row();
                },
            );

            ui.add_space(8.0);
            ui.label(theme.heading("Design Concept"));
            ui.label(project.concept_text());

            ui.add_space(12.0);
            if ui.button("Back to Portfolio").clicked() {
                close_clicked = true;
            }
        });

        if go_next {
            viewer.next();
        }
        if go_prev {
            viewer.prev();
        }

        // should_close fires on backdrop clicks; clicks inside the panel
        // never reach the backdrop.
        if close_clicked || modal.should_close() {
            viewer.close();
        }
    }
}
