//! Error types module
//!
//! Core-level errors. Store and submission failures carry their own enums
//! next to their modules; `AppError` covers validation and formatting.

use crate::format::FormatError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}
