//! Unit tests for the author service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::author::Role;
use crate::domain::entities::claims::IdentityClaim;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{AuthorRepository, InMemoryAuthorRepository};
use crate::services::author::{AuthorService, AuthorUpdate, NewAuthor};
use crate::services::credentials::tests::mocks::UnavailableAuthorRepository;
use crate::services::credentials::{CredentialStore, PasswordHasher};
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    service: AuthorService<InMemoryAuthorRepository>,
    credentials: CredentialStore<InMemoryAuthorRepository>,
    tokens: TokenService,
    repository: Arc<InMemoryAuthorRepository>,
}

fn fixture() -> Fixture {
    let repository = Arc::new(InMemoryAuthorRepository::new());
    let credentials = CredentialStore::new(repository.clone(), PasswordHasher::new(4)).unwrap();
    let tokens = TokenService::new(TokenServiceConfig::default());

    Fixture {
        service: AuthorService::new(credentials.clone(), tokens.clone()),
        credentials,
        tokens,
        repository,
    }
}

fn new_author(user_name: &str) -> NewAuthor {
    NewAuthor {
        first_name: "Katherine".to_string(),
        last_name: "Johnson".to_string(),
        user_name: user_name.to_string(),
        password: "orbital-mechanics".to_string(),
    }
}

#[tokio::test]
async fn test_register_hashes_and_defaults_role() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();

    assert_eq!(profile.role, Role::User);
    assert_eq!(profile.user_name, "katherine");

    let stored = f.repository.find_by_id(profile.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash(), "orbital-mechanics");
    assert!(f
        .credentials
        .check_credentials("katherine", "orbital-mechanics")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_register_duplicate_user_name() {
    let f = fixture();
    f.service.register(new_author("katherine")).await.unwrap();

    let result = f.service.register(new_author("katherine")).await;
    assert_eq!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists {
            user_name: "katherine".to_string()
        }))
    );
    assert_eq!(f.repository.len().await, 1);
}

#[tokio::test]
async fn test_register_validates_input() {
    let f = fixture();
    let mut input = new_author("k");
    input.password = String::new();
    input.first_name = "  ".to_string();

    let result = f.service.register(input).await;
    match result {
        Err(DomainError::Validation { message }) => {
            assert!(message.contains("user_name"));
            assert!(message.contains("password"));
            assert!(message.contains("first_name"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(f.repository.is_empty().await);
}

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    let identity = IdentityClaim::new(profile.id, profile.role);

    let token = f.service.login(&identity).unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 86400);
    assert_eq!(f.tokens.verify(&token.access_token).unwrap(), identity);
}

#[tokio::test]
async fn test_get_and_list() {
    let f = fixture();
    let first = f.service.register(new_author("katherine")).await.unwrap();
    f.service.register(new_author("dorothy")).await.unwrap();

    assert_eq!(f.service.get(first.id).await.unwrap(), first);
    assert_eq!(f.service.list().await.unwrap().len(), 2);
    assert!(matches!(
        f.service.get(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_own_profile() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    let me = IdentityClaim::new(profile.id, Role::User);

    let update = AuthorUpdate {
        first_name: Some("Kathy".to_string()),
        ..AuthorUpdate::default()
    };
    let updated = f.service.update(&me, profile.id, update).await.unwrap();

    assert_eq!(updated.first_name, "Kathy");
    assert_eq!(updated.last_name, "Johnson");
    assert!(updated.updated_at >= profile.updated_at);
}

#[tokio::test]
async fn test_update_without_password_keeps_hash() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    let before = f.repository.find_by_id(profile.id).await.unwrap().unwrap();
    let me = IdentityClaim::new(profile.id, Role::User);

    let update = AuthorUpdate {
        last_name: Some("Goble".to_string()),
        ..AuthorUpdate::default()
    };
    f.service.update(&me, profile.id, update).await.unwrap();

    let after = f.repository.find_by_id(profile.id).await.unwrap().unwrap();
    assert_eq!(before.password_hash(), after.password_hash());
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    let me = IdentityClaim::new(profile.id, Role::User);

    let update = AuthorUpdate {
        password: Some("new-trajectory".to_string()),
        ..AuthorUpdate::default()
    };
    f.service.update(&me, profile.id, update).await.unwrap();

    assert!(f
        .credentials
        .check_credentials("katherine", "orbital-mechanics")
        .await
        .unwrap()
        .is_none());
    assert!(f
        .credentials
        .check_credentials("katherine", "new-trajectory")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_update_other_author_forbidden_for_user() {
    let f = fixture();
    let target = f.service.register(new_author("katherine")).await.unwrap();
    let other = f.service.register(new_author("dorothy")).await.unwrap();
    let actor = IdentityClaim::new(other.id, Role::User);

    let result = f
        .service
        .update(&actor, target.id, AuthorUpdate::default())
        .await;
    assert_eq!(result, Err(AuthError::InsufficientPermissions.into()));
}

#[tokio::test]
async fn test_role_change_requires_admin() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    let me = IdentityClaim::new(profile.id, Role::User);

    let promote = AuthorUpdate {
        role: Some(Role::Admin),
        ..AuthorUpdate::default()
    };
    let result = f.service.update(&me, profile.id, promote.clone()).await;
    assert_eq!(result, Err(AuthError::InsufficientPermissions.into()));

    let admin = IdentityClaim::new(Uuid::new_v4(), Role::Admin);
    let updated = f.service.update(&admin, profile.id, promote).await.unwrap();
    assert_eq!(updated.role, Role::Admin);
}

#[tokio::test]
async fn test_update_user_name_conflict() {
    let f = fixture();
    let profile = f.service.register(new_author("katherine")).await.unwrap();
    f.service.register(new_author("dorothy")).await.unwrap();
    let me = IdentityClaim::new(profile.id, Role::User);

    let rename = AuthorUpdate {
        user_name: Some("dorothy".to_string()),
        ..AuthorUpdate::default()
    };
    let result = f.service.update(&me, profile.id, rename).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists { .. }))
    ));

    let same = AuthorUpdate {
        user_name: Some("katherine".to_string()),
        ..AuthorUpdate::default()
    };
    assert!(f.service.update(&me, profile.id, same).await.is_ok());
}

#[tokio::test]
async fn test_admin_update_unknown_author() {
    let f = fixture();
    let admin = IdentityClaim::new(Uuid::new_v4(), Role::Admin);

    let result = f
        .service
        .update(&admin, Uuid::new_v4(), AuthorUpdate::default())
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_rules() {
    let f = fixture();
    let target = f.service.register(new_author("katherine")).await.unwrap();
    let other = f.service.register(new_author("dorothy")).await.unwrap();

    let stranger = IdentityClaim::new(other.id, Role::User);
    assert_eq!(
        f.service.delete(&stranger, target.id).await,
        Err(AuthError::InsufficientPermissions.into())
    );

    let me = IdentityClaim::new(target.id, Role::User);
    f.service.delete(&me, target.id).await.unwrap();
    assert!(matches!(
        f.service.delete(&me, target.id).await,
        Err(DomainError::NotFound { .. })
    ));

    let admin = IdentityClaim::new(Uuid::new_v4(), Role::Admin);
    f.service.delete(&admin, other.id).await.unwrap();
    assert!(f.repository.is_empty().await);
}

#[tokio::test]
async fn test_store_fault_propagates() {
    let credentials =
        CredentialStore::new(Arc::new(UnavailableAuthorRepository), PasswordHasher::new(4)).unwrap();
    let service = AuthorService::new(credentials, TokenService::new(TokenServiceConfig::default()));

    assert!(matches!(
        service.list().await,
        Err(DomainError::StoreFault { .. })
    ));
    assert!(matches!(
        service.register(new_author("katherine")).await,
        Err(DomainError::StoreFault { .. })
    ));
}
