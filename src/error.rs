//! Error types shared across the crate

use thiserror::Error;

/// Errors produced by the TourLMS core
#[derive(Debug, Error)]
pub enum LmsError {
    /// A caller supplied a value outside the accepted domain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("profile version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

impl LmsError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LmsError::InvalidInput(msg.into())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        LmsError::NotFound { kind, id: id.into() }
    }
}

impl From<serde_json::Error> for LmsError {
    fn from(e: serde_json::Error) -> Self {
        LmsError::Parse(e.to_string())
    }
}

impl From<ron::error::SpannedError> for LmsError {
    fn from(e: ron::error::SpannedError) -> Self {
        LmsError::Parse(e.to_string())
    }
}

impl From<ron::Error> for LmsError {
    fn from(e: ron::Error) -> Self {
        LmsError::Parse(e.to_string())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, LmsError>;
