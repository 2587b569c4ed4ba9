//! Error types for weft-todo.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template rendering failed: {0}")]
    Render(#[from] weft::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;
