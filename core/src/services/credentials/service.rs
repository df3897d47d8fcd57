//! Credential store: password hashing and credential checks over the author repository

use std::sync::Arc;

use bh_shared::utils::{validation, ValidationErrors};

use crate::domain::entities::author::Author;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AuthorRepository;

use super::hasher::PasswordHasher;

/// Plaintext verified against the dummy hash when a user name is unknown
const DUMMY_PASSWORD: &str = "bloghub-dummy-password";

/// Adapter between plaintext credentials and stored author records
///
/// bcrypt work runs on the blocking pool so request workers are never
/// stalled by hashing.
pub struct CredentialStore<R: AuthorRepository> {
    repository: Arc<R>,
    hasher: PasswordHasher,
    dummy_hash: String,
}

impl<R: AuthorRepository> CredentialStore<R> {
    /// Creates a new credential store
    ///
    /// Computes the dummy hash used to keep unknown-user checks as slow as
    /// wrong-password checks.
    pub fn new(repository: Arc<R>, hasher: PasswordHasher) -> DomainResult<Self> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            repository,
            hasher,
            dummy_hash,
        })
    }

    /// The repository backing this store
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Hashes a plaintext on the blocking pool
    pub async fn hash_password(&self, plaintext: &str) -> DomainResult<String> {
        let hasher = self.hasher;
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    /// Verifies a plaintext against a stored hash on the blocking pool
    ///
    /// A malformed stored hash is logged and reported as a mismatch, after the
    /// same bcrypt work a well-formed hash would have cost.
    pub async fn verify_password(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        let hasher = self.hasher;
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let dummy_hash = self.dummy_hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            hasher.verify(&plaintext, &hash).map_err(|e| {
                let _ = hasher.verify(&plaintext, &dummy_hash);
                e
            })
        })
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password verification task failed: {}", e),
        })?;

        match result {
            Ok(matched) => Ok(matched),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }

    /// Replaces the author's stored hash with a hash of `plaintext`
    ///
    /// Only the in-memory entity changes; persisting it is the caller's job.
    pub async fn set_password(&self, author: &mut Author, plaintext: &str) -> DomainResult<()> {
        let mut errors = ValidationErrors::new();
        validation::validate_password(plaintext, &mut errors);
        errors.into_result()?;

        let hash = self.hash_password(plaintext).await?;
        author.set_password_hash(hash);
        Ok(())
    }

    /// Returns the author iff `plaintext` matches the stored hash for `user_name`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Author))` - Credentials are valid
    /// * `Ok(None)` - Unknown user or wrong password
    /// * `Err(DomainError::StoreFault)` - The repository failed
    pub async fn check_credentials(
        &self,
        user_name: &str,
        plaintext: &str,
    ) -> DomainResult<Option<Author>> {
        let author = self.repository.find_by_user_name(user_name).await?;

        match author {
            Some(author) => {
                if self.verify_password(plaintext, author.password_hash()).await? {
                    Ok(Some(author))
                } else {
                    tracing::debug!(user_name = %user_name, "Password mismatch");
                    Ok(None)
                }
            }
            None => {
                // Same bcrypt work as the known-user path
                self.verify_password(plaintext, &self.dummy_hash).await?;
                tracing::debug!(user_name = %user_name, "Unknown user name");
                Ok(None)
            }
        }
    }
}

impl<R: AuthorRepository> Clone for CredentialStore<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: self.hasher,
            dummy_hash: self.dummy_hash.clone(),
        }
    }
}
