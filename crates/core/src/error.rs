//! Error types for ticketview.

use thiserror::Error;

/// Primary error type for loading, examining, and displaying documents.
#[derive(Error, Debug)]
pub enum ExamineError {
    #[error("malformed geometry on page {page}, token {index}: {reason}")]
    MalformedGeometry {
        page: u32,
        index: usize,
        reason: String,
    },

    #[error("page {got} follows page {previous}; pages must be strictly ascending")]
    PageOrder { previous: u32, got: u32 },

    #[error("document has {0} pages; page numbers are limited to u32")]
    TooManyPages(usize),

    #[error("invalid parameter: {0}")]
    InvalidParams(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("token source error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown document selector: {0}")]
    UnknownMode(String),

    #[error("invalid selector regex: {0}")]
    Selector(#[from] regex::Error),
}

/// Convenience Result type alias for ExamineError.
pub type Result<T> = std::result::Result<T, ExamineError>;
