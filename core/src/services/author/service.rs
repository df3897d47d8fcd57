//! Author service implementation

use std::sync::Arc;

use bh_shared::utils::{validation, ValidationErrors};
use uuid::Uuid;

use crate::domain::entities::author::{Author, AuthorProfile, Role};
use crate::domain::entities::claims::IdentityClaim;
use crate::domain::value_objects::AuthToken;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AuthorRepository;
use crate::services::credentials::CredentialStore;
use crate::services::token::TokenService;

/// Input for registering a new author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
}

/// Partial update of an author; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    /// New plaintext password, hashed before storing
    pub password: Option<String>,
    /// Admin only
    pub role: Option<Role>,
}

impl AuthorUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(first_name) = &self.first_name {
            validation::validate_required("first_name", first_name, &mut errors);
        }
        if let Some(last_name) = &self.last_name {
            validation::validate_required("last_name", last_name, &mut errors);
        }
        if let Some(user_name) = &self.user_name {
            validation::validate_user_name(user_name, &mut errors);
        }
        if let Some(password) = &self.password {
            validation::validate_password(password, &mut errors);
        }

        errors.into_result()
    }
}

impl NewAuthor {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validation::validate_required("first_name", &self.first_name, &mut errors);
        validation::validate_required("last_name", &self.last_name, &mut errors);
        validation::validate_user_name(&self.user_name, &mut errors);
        validation::validate_password(&self.password, &mut errors);
        errors.into_result()
    }
}

/// Author use cases
pub struct AuthorService<R: AuthorRepository> {
    credentials: CredentialStore<R>,
    tokens: TokenService,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(credentials: CredentialStore<R>, tokens: TokenService) -> Self {
        Self { credentials, tokens }
    }

    fn repository(&self) -> &Arc<R> {
        self.credentials.repository()
    }

    fn not_found() -> DomainError {
        DomainError::NotFound {
            resource: "Author".to_string(),
        }
    }

    /// Registers a new author with role `User`
    ///
    /// The password is hashed before anything reaches the store.
    pub async fn register(&self, input: NewAuthor) -> DomainResult<AuthorProfile> {
        input.validate()?;

        if self.repository().exists_by_user_name(&input.user_name).await? {
            return Err(AuthError::UserAlreadyExists {
                user_name: input.user_name,
            }
            .into());
        }

        let mut author = Author::new(
            input.first_name.trim().to_string(),
            input.last_name.trim().to_string(),
            input.user_name,
            String::new(),
        );
        self.credentials.set_password(&mut author, &input.password).await?;

        // The store's uniqueness check still wins a concurrent registration race
        let author = self.repository().create(author).await?;
        tracing::info!(author_id = %author.id, user_name = %author.user_name, "Author registered");

        Ok(author.profile())
    }

    /// Mints an access token for an identity authenticated by the password guard
    pub fn login(&self, identity: &IdentityClaim) -> DomainResult<AuthToken> {
        let token = self.tokens.issue(identity)?;
        tracing::info!(author_id = %identity.id, "Access token issued");
        Ok(AuthToken::bearer(token, self.tokens.token_ttl_seconds()))
    }

    /// Fetches one author profile
    pub async fn get(&self, id: Uuid) -> DomainResult<AuthorProfile> {
        self.repository()
            .find_by_id(id)
            .await?
            .map(AuthorProfile::from)
            .ok_or_else(Self::not_found)
    }

    /// Lists all author profiles, oldest first
    pub async fn list(&self) -> DomainResult<Vec<AuthorProfile>> {
        let authors = self.repository().list().await?;
        Ok(authors.iter().map(AuthorProfile::from).collect())
    }

    /// Applies a partial update on behalf of `actor`
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::InsufficientPermissions)` - Actor is neither the author nor an admin,
    ///   or a non-admin tried to change a role
    /// * `Err(DomainError::NotFound)` - Unknown author
    /// * `Err(AuthError::UserAlreadyExists)` - New user name is taken
    pub async fn update(
        &self,
        actor: &IdentityClaim,
        id: Uuid,
        update: AuthorUpdate,
    ) -> DomainResult<AuthorProfile> {
        if !actor.can_manage(id) {
            return Err(AuthError::InsufficientPermissions.into());
        }
        if update.role.is_some() && !actor.is_admin() {
            return Err(AuthError::InsufficientPermissions.into());
        }
        update.validate()?;

        let mut author = self
            .repository()
            .find_by_id(id)
            .await?
            .ok_or_else(Self::not_found)?;

        if let Some(user_name) = update.user_name {
            if user_name != author.user_name
                && self.repository().exists_by_user_name(&user_name).await?
            {
                return Err(AuthError::UserAlreadyExists { user_name }.into());
            }
            author.user_name = user_name;
        }
        if let Some(first_name) = update.first_name {
            author.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            author.last_name = last_name.trim().to_string();
        }
        if let Some(role) = update.role {
            author.role = role;
        }
        if let Some(password) = update.password {
            self.credentials.set_password(&mut author, &password).await?;
        }
        author.touch();

        let author = self.repository().update(author).await?;
        tracing::info!(author_id = %author.id, actor_id = %actor.id, "Author updated");

        Ok(author.profile())
    }

    /// Deletes an author on behalf of `actor`
    pub async fn delete(&self, actor: &IdentityClaim, id: Uuid) -> DomainResult<()> {
        if !actor.can_manage(id) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        if !self.repository().delete(id).await? {
            return Err(Self::not_found());
        }

        tracing::info!(author_id = %id, actor_id = %actor.id, "Author deleted");
        Ok(())
    }
}
