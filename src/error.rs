use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown product ID: {0}")]
    UnknownProduct(i64),
    #[error("Input closed before the order was complete")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, OrderError>;
