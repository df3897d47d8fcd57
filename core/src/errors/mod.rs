//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use bh_shared::utils::ValidationErrors;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The backing store is unavailable or returned garbage
    #[error("Store fault: {message}")]
    StoreFault { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a store-layer fault
    pub fn store(message: impl Into<String>) -> Self {
        DomainError::StoreFault {
            message: message.into(),
        }
    }

    /// Client-caused authentication failures, all answered with the same 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            DomainError::Auth(AuthError::MissingCredentials)
                | DomainError::Auth(AuthError::InvalidCredentials)
                | DomainError::Token(TokenError::InvalidToken)
                | DomainError::Token(TokenError::ExpiredToken)
        )
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation {
            message: errors.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
