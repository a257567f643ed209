use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Dataset error: {0}")]
    Dataset(String),
    #[error("Book not found: {0}")]
    BookNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
