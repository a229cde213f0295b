//! Error types for the portfolio domain.
//!
//! - [`TypingError`] - Typing engine construction failures
//! - [`ContentError`] - Site content parsing and validation
//! - [`StoreError`] - Preference storage access
//! - [`FormError`] - Contact form submit flow

use thiserror::Error;

use crate::form::FieldErrors;

/// Typing engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    /// The phrase list was empty.
    #[error("typing effect needs at least one phrase")]
    EmptyTextList,
}

/// Site content errors.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The TOML document could not be parsed into the content model.
    #[error("content parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document parsed but violates a content rule.
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage backend not available (private mode, disabled, no window).
    #[error("preference storage not available")]
    Unavailable,
    /// Backend refused the write (quota, permissions).
    #[error("failed to save preference")]
    WriteFailed,
}

/// Contact form submit errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// One or more fields failed validation.
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    /// A submission is already in flight.
    #[error("a message is already being sent")]
    AlreadySending,
}
