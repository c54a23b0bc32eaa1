use eframe::egui;

use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Catalog,
        CatalogStatus,
        Viewer,
    },
    gui::{
        category_tabs::category_tabs,
        message_overlay::MessageOverlay,
        project_grid::project_grid,
        project_modal::ProjectModal,
        theme::{
            set_theme,
            Theme,
        },
        top_bar::{
            TopBar,
            TopBarAction,
        },
    },
    persistence::StoreConfig,
};

pub struct PortfolioApp {
    // Catalog and viewer state
    pub catalog: Catalog,
    pub viewer: Viewer,

    // Configuration
    store_config: StoreConfig,

    // UI state
    theme: Theme,
    message_overlay: MessageOverlay,

    // Background work
    task_manager: TaskManager,
    fetch_generation: u64,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::studio();
        set_theme(&cc.egui_ctx, theme.clone());

        let store_config = StoreConfig::load_or_init();
        let mut task_manager = TaskManager::new();
        let fetch_generation = task_manager.fetch_projects(store_config.clone());

        Self {
            catalog: Catalog::new(),
            viewer: Viewer::new(),
            store_config,
            theme,
            message_overlay: MessageOverlay::new(),
            task_manager,
            fetch_generation,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::ProjectsLoaded { generation, result } => {
                // A result from a superseded fetch must never touch the
                // catalog.
                if generation != self.fetch_generation {
                    println!("Discarding stale catalog result (generation {})", generation);
                    return;
                }

                match &result {
                    Ok(projects) => println!("Loaded {} projects", projects.len()),
                    Err(e) => eprintln!("Catalog fetch failed: {}", e),
                }

                self.catalog.apply_fetch(result);
                self.message_overlay.clear_message();
            }
        }
    }

    fn refresh(&mut self) {
        self.viewer.close();
        self.catalog.begin_reload();
        self.message_overlay.set_message("Loading works...");
        self.fetch_generation = self.task_manager.fetch_projects(self.store_config.clone());
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) = TopBar::show(ctx, self.catalog.status(), &self.theme) {
            match action {
                TopBarAction::Refresh => self.refresh(),
            }
        }

        let mut retry = false;
        let mut selected = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.catalog.status().clone() {
                CatalogStatus::Failed(message) => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.colored_label(self.theme.red(), "Could not load the portfolio.");
                        ui.label(self.theme.muted(&message));
                        ui.add_space(10.0);
                        if ui.button("Try Again").clicked() {
                            retry = true;
                        }
                    });
                }
                CatalogStatus::Loading | CatalogStatus::Loaded => {
                    ui.heading(self.theme.heading("Featured Projects"));
                    ui.add_space(6.0);
                    category_tabs(ui, &mut self.catalog);
                    ui.add_space(10.0);
                    selected = project_grid(ui, &self.catalog, &self.theme);
                }
            }
        });

        if retry {
            self.refresh();
        }

        if let Some(id) = selected {
            if let Some(project) = self.catalog.project_by_id(&id).cloned() {
                self.viewer.select(&project);
            }
        }

        ProjectModal::show(ctx, &mut self.viewer, &self.theme);
        self.message_overlay.show(ctx, &self.theme);
    }
}
