//! Error types for Monograph.
//!
//! Extraction never fails: a field with no qualifying match is `None`.
//! Only malformed input records and unanswerable questions surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An index record is missing a required field or has the wrong shape.
    #[error("Invalid index record: {0}")]
    InvalidRecord(String),

    /// The question contained nothing but stop words or very short tokens.
    #[error("No searchable keywords in question: {0:?}")]
    NoKeywords(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
