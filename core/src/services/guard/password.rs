//! HTTP Basic credentials guard

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::{AuthError, DomainError};
use crate::repositories::AuthorRepository;
use crate::services::credentials::CredentialStore;

use super::header::{parse_authorization, scheme_matches, BASIC_SCHEME};
use super::{Authenticator, GuardOutcome};

/// Admits requests carrying `Authorization: Basic base64(user_name:password)`
/// that match a stored author
pub struct PasswordGuard<R: AuthorRepository> {
    credentials: CredentialStore<R>,
}

impl<R: AuthorRepository> PasswordGuard<R> {
    pub fn new(credentials: CredentialStore<R>) -> Self {
        Self { credentials }
    }

    /// Decodes the Basic payload into `(user_name, password)`
    ///
    /// Splits at the first colon, so passwords may themselves contain colons.
    fn decode_credentials(encoded: &str) -> Result<(String, String), DomainError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| AuthError::InvalidCredentials)?;
        let decoded = String::from_utf8(bytes).map_err(|_| AuthError::InvalidCredentials)?;

        let (user_name, password) = decoded
            .split_once(':')
            .ok_or(AuthError::InvalidCredentials)?;

        Ok((user_name.to_string(), password.to_string()))
    }
}

impl<R: AuthorRepository> Clone for PasswordGuard<R> {
    fn clone(&self) -> Self {
        Self {
            credentials: self.credentials.clone(),
        }
    }
}

#[async_trait]
impl<R: AuthorRepository + 'static> Authenticator for PasswordGuard<R> {
    async fn authenticate(&self, authorization: Option<&str>) -> GuardOutcome {
        let Some(header) = authorization else {
            return GuardOutcome::Rejected(AuthError::MissingCredentials.into());
        };

        let encoded = match parse_authorization(header) {
            Some((scheme, encoded)) if scheme_matches(scheme, BASIC_SCHEME) => encoded,
            _ => return GuardOutcome::Rejected(AuthError::InvalidCredentials.into()),
        };

        let (user_name, password) = match Self::decode_credentials(encoded) {
            Ok(credentials) => credentials,
            Err(error) => return GuardOutcome::Rejected(error),
        };

        match self.credentials.check_credentials(&user_name, &password).await {
            Ok(Some(author)) => GuardOutcome::Authenticated(author.claim()),
            Ok(None) => GuardOutcome::Rejected(AuthError::InvalidCredentials.into()),
            Err(error) => GuardOutcome::Rejected(error),
        }
    }

    fn scheme(&self) -> &'static str {
        BASIC_SCHEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::entities::author::Author;
    use crate::repositories::InMemoryAuthorRepository;
    use crate::services::credentials::tests::mocks::UnavailableAuthorRepository;
    use crate::services::credentials::PasswordHasher;

    fn basic(user_name: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user_name, password)))
    }

    async fn guard_with(user_name: &str, password: &str) -> (PasswordGuard<InMemoryAuthorRepository>, Author) {
        let store = CredentialStore::new(
            Arc::new(InMemoryAuthorRepository::new()),
            PasswordHasher::new(4),
        )
        .unwrap();

        let mut author = Author::new(
            "Grace".to_string(),
            "Hopper".to_string(),
            user_name.to_string(),
            String::new(),
        );
        store.set_password(&mut author, password).await.unwrap();
        let author = store.repository().create(author).await.unwrap();

        (PasswordGuard::new(store), author)
    }

    #[tokio::test]
    async fn test_valid_credentials() {
        let (guard, author) = guard_with("grace", "cobol").await;

        let outcome = guard.authenticate(Some(&basic("grace", "cobol"))).await;
        assert_eq!(outcome, GuardOutcome::Authenticated(author.claim()));
    }

    #[tokio::test]
    async fn test_password_containing_colons() {
        let (guard, author) = guard_with("grace", "a:b:c").await;

        let outcome = guard.authenticate(Some(&basic("grace", "a:b:c"))).await;
        assert_eq!(outcome, GuardOutcome::Authenticated(author.claim()));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let (guard, _) = guard_with("grace", "cobol").await;
        assert_eq!(
            guard.authenticate(None).await,
            GuardOutcome::Rejected(AuthError::MissingCredentials.into())
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let (guard, _) = guard_with("grace", "cobol").await;

        let wrong_password = guard.authenticate(Some(&basic("grace", "fortran"))).await;
        let unknown_user = guard.authenticate(Some(&basic("alan", "cobol"))).await;

        assert_eq!(wrong_password, GuardOutcome::Rejected(AuthError::InvalidCredentials.into()));
        assert_eq!(wrong_password, unknown_user);
    }

    #[tokio::test]
    async fn test_malformed_headers() {
        let (guard, _) = guard_with("grace", "cobol").await;
        let no_colon = format!("Basic {}", STANDARD.encode("gracecobol"));

        for header in ["Bearer abc", "Basic !!!not-base64!!!", "Basic", no_colon.as_str()] {
            assert_eq!(
                guard.authenticate(Some(header)).await,
                GuardOutcome::Rejected(AuthError::InvalidCredentials.into()),
                "header {:?}",
                header
            );
        }
    }

    #[tokio::test]
    async fn test_store_fault_is_propagated() {
        let store = CredentialStore::new(Arc::new(UnavailableAuthorRepository), PasswordHasher::new(4)).unwrap();
        let guard = PasswordGuard::new(store);

        let outcome = guard.authenticate(Some(&basic("grace", "cobol"))).await;
        assert!(matches!(outcome, GuardOutcome::Rejected(DomainError::StoreFault { .. })));
    }
}
