//! Route handlers and the shared application state

pub mod auth;
pub mod authors;
pub mod blog_posts;
pub mod health;

use std::sync::Arc;

use bh_core::{
    errors::DomainResult,
    repositories::AuthorRepository,
    services::{
        AuthorService, CredentialStore, PasswordGuard, PasswordHasher, TokenGuard, TokenService,
        TokenServiceConfig,
    },
};
use bh_shared::config::AuthConfig;

/// Application state that holds shared services
pub struct AppState<R: AuthorRepository> {
    pub author_service: Arc<AuthorService<R>>,
    pub password_guard: Arc<PasswordGuard<R>>,
    pub token_guard: Arc<TokenGuard>,
}

impl<R: AuthorRepository> AppState<R> {
    /// Wires the credential store, token service and guards over `repository`
    ///
    /// The signing secret is read from `auth` once, here.
    pub fn new(repository: Arc<R>, auth: &AuthConfig) -> DomainResult<Self> {
        let credentials =
            CredentialStore::new(repository, PasswordHasher::from_config(&auth.password))?;
        let tokens = TokenService::new(TokenServiceConfig::from_jwt_config(&auth.jwt)?);

        Ok(Self {
            author_service: Arc::new(AuthorService::new(credentials.clone(), tokens.clone())),
            password_guard: Arc::new(PasswordGuard::new(credentials)),
            token_guard: Arc::new(TokenGuard::new(tokens)),
        })
    }
}
