//! Credential store module
//!
//! Password hashing and credential checks against the author repository.

mod hasher;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use hasher::{PasswordHasher, DEFAULT_BCRYPT_COST};
pub use service::CredentialStore;
