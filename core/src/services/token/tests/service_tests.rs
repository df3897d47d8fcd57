//! Unit tests for token service

use bh_shared::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::Algorithm;
use uuid::Uuid;

use crate::domain::entities::author::Role;
use crate::domain::entities::claims::{Claims, IdentityClaim};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test_secret_key_for_testing_only".to_string(),
        ..TokenServiceConfig::default()
    })
}

fn identity() -> IdentityClaim {
    IdentityClaim::new(Uuid::new_v4(), Role::User)
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = create_test_service();
    let identity = IdentityClaim::new(Uuid::new_v4(), Role::Admin);

    let token = service.issue(&identity).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let verified = service.verify(&token).unwrap();
    assert_eq!(verified, identity);
}

#[test]
fn test_tokens_for_same_identity_are_distinct() {
    let service = create_test_service();
    let identity = identity();

    let first = service.issue(&identity).unwrap();
    let second = service.issue(&identity).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_expired_token_is_rejected_as_expired() {
    let service = create_test_service();
    let token = service
        .issue_at(&identity(), Utc::now() - Duration::hours(25))
        .unwrap();

    assert_eq!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::ExpiredToken))
    );
}

#[test]
fn test_tampered_signature_is_invalid() {
    let service = create_test_service();
    let token = service.issue(&identity()).unwrap();

    let mut bytes = token.into_bytes();
    let index = bytes.len() - 10;
    bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    assert_eq!(
        service.verify(&tampered),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_tampered_payload_is_invalid() {
    let service = create_test_service();
    let token = service.issue(&identity()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}.{}x.{}", parts[0], parts[1], parts[2]);

    assert_eq!(
        service.verify(&forged),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_foreign_secret_is_invalid() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "a_completely_different_secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let token = other.issue(&identity()).unwrap();
    assert_eq!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_wrong_audience_is_invalid() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "test_secret_key_for_testing_only".to_string(),
        audience: "someone-else".to_string(),
        ..TokenServiceConfig::default()
    });

    let token = other.issue(&identity()).unwrap();
    assert_eq!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_garbage_is_invalid() {
    let service = create_test_service();

    for input in ["", "not-a-token", "a.b.c", "Bearer abc"] {
        assert_eq!(
            service.verify(input),
            Err(DomainError::Token(TokenError::InvalidToken)),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_non_uuid_subject_is_invalid() {
    let service = create_test_service();
    let mut claims = Claims::new(
        &identity(),
        Utc::now(),
        Duration::hours(1),
        "bloghub",
        "bloghub-api",
    );
    claims.sub = "u1".to_string();

    let token = service.encode_jwt(&claims).unwrap();
    assert_eq!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidToken))
    );
}

#[test]
fn test_ttl_follows_config() {
    let service = TokenService::new(TokenServiceConfig {
        token_expiry_seconds: 3600,
        ..TokenServiceConfig::default()
    });
    assert_eq!(service.token_ttl_seconds(), 3600);
    assert_eq!(create_test_service().token_ttl_seconds(), 86400);
}

#[test]
fn test_config_from_jwt_settings() {
    let jwt = JwtConfig::new("from-config").with_expiry_hours(2);
    let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();

    assert_eq!(config.jwt_secret, "from-config");
    assert_eq!(config.algorithm, Algorithm::HS256);
    assert_eq!(config.token_expiry_seconds, 7200);
}

#[test]
fn test_config_rejects_unusable_settings() {
    let mut jwt = JwtConfig::new("secret");
    jwt.algorithm = "RS256".to_string();
    assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());

    let empty = JwtConfig::new("");
    assert!(TokenServiceConfig::from_jwt_config(&empty).is_err());
}
