//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the BlogHub backend.
//! It provides the MySQL-backed stores behind the `AuthorRepository` and
//! `BlogPostRepository` interfaces defined in `bh_core`.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use bh_core::errors::{DomainError, DomainResult};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration re-exported from the shared crate
pub mod config {
    pub use bh_shared::config::DatabaseConfig;
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::store(error.to_string())
    }
}
