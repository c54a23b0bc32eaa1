use eframe::egui;

use crate::{
    core::{
        Catalog,
        ProjectRecord,
    },
    gui::theme::Theme,
};

const GRID_COLUMNS: usize = 2;
const CARD_IMAGE_HEIGHT: f32 = 200.0;

/// Card grid over the filtered projects. Returns the id of a clicked
/// card, if any.
pub fn project_grid(ui: &mut egui::Ui, catalog: &Catalog, theme: &Theme) -> Option<String> {
    let filtered = catalog.filtered_projects();

    if filtered.is_empty() {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(theme.muted("No projects found."));
        });
        return None;
    }

    let mut selected = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for row in filtered.chunks(GRID_COLUMNS) {
            ui.columns(GRID_COLUMNS, |columns| {
                for (column, project) in columns.iter_mut().zip(row.iter().copied()) {
                    if project_card(column, project, theme) {
                        selected = Some(project.id.clone());
                    }
                }
            });
            ui.add_space(12.0);
        }
    });

    selected
}

fn project_card(ui: &mut egui::Ui, project: &ProjectRecord, theme: &Theme) -> bool {
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            let width = ui.available_width();

            match project.cover_image.as_deref() {
                Some(url) => {
                    ui.add(
                        egui::Image::new(url)
                            .fit_to_exact_size(egui::vec2(width, CARD_IMAGE_HEIGHT)),
                    );
                }
                None => {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(width, CARD_IMAGE_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(rect, 2.0, ui.visuals().faint_bg_color);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "No Image",
                        egui::TextStyle::Small.resolve(ui.style()),
                        ui.visuals().weak_text_color(),
                    );
                }
            }

            ui.add_space(6.0);
            ui.label(theme.muted(&project.category.to_uppercase()));
            ui.heading(&project.title);
            ui.label(
                theme.muted(&format!("{} · {}", project.location_text(), project.area_text())),
            );
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}
