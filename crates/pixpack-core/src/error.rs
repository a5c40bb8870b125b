use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixPackError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Page limit reached ({max_pages} pages)")]
    PageLimit { max_pages: u32 },
    #[error("Operation on disposed {0}")]
    Disposed(&'static str),
}

pub type Result<T> = std::result::Result<T, PixPackError>;
