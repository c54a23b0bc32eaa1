use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Content store error: {0}")]
    Store(String),

    #[error("GalleryError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for GalleryError {
    fn from(error: std::io::Error) -> Self {
        GalleryError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for GalleryError {
    fn from(error: reqwest::Error) -> Self {
        GalleryError::Reqwest(Box::new(error))
    }
}
