//! Password hashing via bcrypt.

use bh_shared::config::PasswordConfig;

use crate::errors::DomainError;

/// bcrypt cost factor used unless configured otherwise
pub const DEFAULT_BCRYPT_COST: u32 = 11;

/// Salted one-way password hashing
///
/// Pure and synchronous. Callers on an async runtime should run it on the
/// blocking pool; see [`super::CredentialStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost
    ///
    /// Costs outside bcrypt's accepted range are rejected when hashing.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with bcrypt
    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("bcrypt hash: {}", e),
        })
    }

    /// Verify a password against a bcrypt hash
    ///
    /// A hash that cannot be parsed is an error, a mismatch is `Ok(false)`.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("bcrypt verify: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}
