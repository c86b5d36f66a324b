use thiserror::Error;

/// Faults raised by the page the validator is attached to.
///
/// User-input failures are never errors; they live in [`crate::ErrorState`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("element '{id}' not found on page")]
    MissingElement { id: String },

    #[error("element '{id}' is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("page is missing required elements: {}", missing.join(", "))]
    Contract { missing: Vec<String> },

    #[error("form '{id}' already has a validator attached")]
    AlreadyAttached { id: String },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type PageResult<T> = Result<T, PageError>;
