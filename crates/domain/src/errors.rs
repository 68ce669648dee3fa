//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// City query was empty or whitespace only
    #[error("City name must not be blank")]
    BlankCityName,

    /// Unknown theme palette name
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Unknown color mode name
    #[error("Unknown color mode: {0}")]
    UnknownColorMode(String),
}
