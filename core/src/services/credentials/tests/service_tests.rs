//! Unit tests for the credential store

use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::author::Author;
use crate::errors::DomainError;
use crate::repositories::{AuthorRepository, InMemoryAuthorRepository};
use crate::services::credentials::{CredentialStore, PasswordHasher};

use super::mocks::UnavailableAuthorRepository;

const TEST_COST: u32 = 4;

fn create_store() -> CredentialStore<InMemoryAuthorRepository> {
    CredentialStore::new(
        Arc::new(InMemoryAuthorRepository::new()),
        PasswordHasher::new(TEST_COST),
    )
    .unwrap()
}

async fn seed(
    store: &CredentialStore<InMemoryAuthorRepository>,
    user_name: &str,
    password: &str,
) -> Author {
    let mut author = Author::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        user_name.to_string(),
        String::new(),
    );
    store.set_password(&mut author, password).await.unwrap();
    store.repository().create(author).await.unwrap()
}

#[tokio::test]
async fn test_check_credentials_accepts_correct_password() {
    let store = create_store();
    let author = seed(&store, "ada", "analytical-engine").await;

    let found = store
        .check_credentials("ada", "analytical-engine")
        .await
        .unwrap()
        .expect("credentials should match");
    assert_eq!(found.id, author.id);
}

#[tokio::test]
async fn test_check_credentials_rejects_wrong_password() {
    let store = create_store();
    seed(&store, "ada", "analytical-engine").await;

    let result = store.check_credentials("ada", "difference-engine").await;
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn test_check_credentials_unknown_user_is_none() {
    let store = create_store();
    seed(&store, "ada", "analytical-engine").await;

    let result = store.check_credentials("charles", "analytical-engine").await;
    assert_eq!(result, Ok(None));
}

#[tokio::test]
async fn test_set_password_stores_hash_not_plaintext() {
    let store = create_store();
    let author = seed(&store, "ada", "analytical-engine").await;

    assert_ne!(author.password_hash(), "analytical-engine");
    assert!(author.password_hash().starts_with("$2"));
    assert!(store
        .verify_password("analytical-engine", author.password_hash())
        .await
        .unwrap());
}

#[tokio::test]
async fn test_set_password_rehash_replaces_old_password() {
    let store = create_store();
    let mut author = seed(&store, "ada", "first-password").await;
    let old_hash = author.password_hash().to_string();

    store.set_password(&mut author, "second-password").await.unwrap();
    assert_ne!(author.password_hash(), old_hash);
    store.repository().update(author).await.unwrap();

    assert_eq!(store.check_credentials("ada", "first-password").await, Ok(None));
    assert!(store
        .check_credentials("ada", "second-password")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_set_password_rejects_empty_and_oversized() {
    let store = create_store();
    let mut author = Author::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        "ada".to_string(),
        "unchanged".to_string(),
    );

    let empty = store.set_password(&mut author, "").await;
    assert!(matches!(empty, Err(DomainError::Validation { .. })));

    let long = "x".repeat(73);
    let oversized = store.set_password(&mut author, &long).await;
    assert!(matches!(oversized, Err(DomainError::Validation { .. })));

    assert_eq!(author.password_hash(), "unchanged");
}

#[tokio::test]
async fn test_malformed_stored_hash_is_no_match() {
    let store = create_store();
    let author = Author::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        "ada".to_string(),
        "garbage".to_string(),
    );
    store.repository().create(author).await.unwrap();

    assert_eq!(store.check_credentials("ada", "anything").await, Ok(None));
}

#[tokio::test]
async fn test_malformed_stored_hash_costs_a_full_verification() {
    let store = CredentialStore::new(
        Arc::new(InMemoryAuthorRepository::new()),
        PasswordHasher::new(8),
    )
    .unwrap();
    let author = Author::new(
        "Ada".to_string(),
        "Lovelace".to_string(),
        "ada".to_string(),
        "garbage".to_string(),
    );
    store.repository().create(author).await.unwrap();

    let started = Instant::now();
    assert_eq!(store.check_credentials("nobody", "anything").await, Ok(None));
    let unknown_user = started.elapsed();

    let started = Instant::now();
    assert_eq!(store.check_credentials("ada", "anything").await, Ok(None));
    let malformed_hash = started.elapsed();

    assert!(
        malformed_hash * 3 >= unknown_user,
        "malformed hash took {:?}, unknown user took {:?}",
        malformed_hash,
        unknown_user
    );
}

#[tokio::test]
async fn test_store_fault_surfaces() {
    let store = CredentialStore::new(
        Arc::new(UnavailableAuthorRepository),
        PasswordHasher::new(TEST_COST),
    )
    .unwrap();

    let result = store.check_credentials("ada", "pw").await;
    assert!(matches!(result, Err(DomainError::StoreFault { .. })));
}

#[test]
fn test_invalid_cost_fails_construction() {
    let result = CredentialStore::new(
        Arc::new(InMemoryAuthorRepository::new()),
        PasswordHasher::new(99),
    );
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
