//! # AppError
//!
//! Centralized error handling for Menagerie. The HTTP surface only ever
//! distinguishes three outcomes, so that is all the enum models.

use thiserror::Error;

/// The primary error type for all mg-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Path did not resolve to an existing category, board, or image.
    /// The first field names what was expected ("directory", "file").
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    /// A required request parameter was missing or empty
    #[error("missing required parameter: {0}")]
    BadRequest(&'static str),

    /// Any filesystem failure other than "does not exist"
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for gallery logic.
pub type Result<T> = std::result::Result<T, AppError>;
