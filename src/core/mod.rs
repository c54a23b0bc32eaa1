pub mod catalog;
pub mod errors;
pub mod models;
pub mod tasks;
pub mod viewer;

pub use catalog::{Catalog, CatalogStatus};
pub use errors::GalleryError;
pub use models::ProjectRecord;
pub use viewer::Viewer;
