//! Error types for the bulk sender.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial error taxonomy

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SenderError {
    #[error("File '{}' not found", .0.display())]
    FileMissing(PathBuf),

    #[error("CSV file '{}' must have a column named '{column}'", path.display())]
    MalformedInput { path: PathBuf, column: String },

    #[error("Error reading CSV file: {0}")]
    ReadError(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SenderError>;

impl From<csv::Error> for SenderError {
    fn from(err: csv::Error) -> Self {
        SenderError::ReadError(err.to_string())
    }
}
