pub mod app;
pub mod category_tabs;
pub mod message_overlay;
pub mod project_grid;
pub mod project_modal;
pub mod theme;
pub mod top_bar;

pub use app::PortfolioApp;
