//! Error types for authentication and token handling
//!
//! The variants distinguish failure causes for logging. The presentation
//! layer collapses every client-caused authentication failure into one
//! generic unauthorized response.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No authorization header was presented
    #[error("Missing credentials")]
    MissingCredentials,

    /// Unknown user, wrong password or undecodable basic credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("User already exists: {user_name}")]
    UserAlreadyExists { user_name: String },
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed, unsigned or forged token
    #[error("Invalid token")]
    InvalidToken,

    /// Valid signature, past its expiry
    #[error("Token expired")]
    ExpiredToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
