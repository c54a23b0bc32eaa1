use eframe::egui;

use crate::core::Catalog;

/// Category filter row with per-category count badges. Clicking a tab
/// sets the active category on the catalog.
pub fn category_tabs(ui: &mut egui::Ui, catalog: &mut Catalog) {
    let categories = catalog.categories();

    ui.horizontal_wrapped(|ui| {
        for category in categories {
            let selected = catalog.active_category() == category;
            let label = format!("{} ({})", category, catalog.count(&category));

            if ui.selectable_label(selected, label).clicked() {
                catalog.set_category(category);
            }
        }
    });
}
