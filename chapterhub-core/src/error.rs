//! Error types for chapterhub.

use thiserror::Error;

/// Errors that can occur in chapterhub operations.
#[derive(Error, Debug)]
pub enum ChapterHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event catalog error: {0}")]
    Catalog(String),

    #[error("Invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("Invalid year: {year} (must be 1..=9999)")]
    InvalidYear { year: i32 },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chapterhub operations.
pub type ChapterHubResult<T> = Result<T, ChapterHubError>;
