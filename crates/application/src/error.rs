//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// User input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// City unknown to the weather provider
    #[error("City not found: {0}")]
    NotFound(String),

    /// External service error (network, non-2xx response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Internal error (malformed payload, client setup)
    #[error("Internal error: {0}")]
    Internal(String),
}
